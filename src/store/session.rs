use std::collections::HashMap;

use super::SessionStore;

/// Volatile in-process slot store with browser-session semantics.
#[derive(Debug, Default)]
pub struct MemorySession {
    slots: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, slot: &str) -> Option<String> {
        self.slots.get(slot).cloned()
    }

    fn set(&mut self, slot: &str, value: String) {
        self.slots.insert(slot.to_string(), value);
    }
}

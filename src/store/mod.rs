//! Session-scoped persistence for the local fallback path.

pub mod local;
pub mod session;

pub use local::{LocalStore, SLOT_EXPENSES, SLOT_SUBSCRIPTIONS, SLOT_USERS};
pub use session::MemorySession;

/// Abstraction over session-scoped key-value stores. Slots hold
/// JSON-encoded sequences; a missing slot is not an error. Contents do not
/// outlive the session.
pub trait SessionStore {
    fn get(&self, slot: &str) -> Option<String>;
    fn set(&mut self, slot: &str, value: String);
}

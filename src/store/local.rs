use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::Mirror;
use crate::errors::Result;

use super::SessionStore;

pub const SLOT_USERS: &str = "users";
pub const SLOT_SUBSCRIPTIONS: &str = "subscriptions";
pub const SLOT_EXPENSES: &str = "expenses";

/// Reads and writes the three entity collections as JSON slots in a
/// session store. Writes are wholesale: the entire mirror is re-serialized
/// on every save, no partial updates.
#[derive(Debug)]
pub struct LocalStore<S: SessionStore> {
    session: S,
}

impl<S: SessionStore> LocalStore<S> {
    pub fn new(session: S) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    /// Loads all three collections. Missing or malformed slots degrade to
    /// empty sequences rather than raising.
    pub fn load_all(&self) -> Mirror {
        Mirror {
            users: self.read_slot(SLOT_USERS),
            subscriptions: self.read_slot(SLOT_SUBSCRIPTIONS),
            expenses: self.read_slot(SLOT_EXPENSES),
        }
    }

    pub fn save_all(&mut self, mirror: &Mirror) -> Result<()> {
        self.write_slot(SLOT_USERS, &mirror.users)?;
        self.write_slot(SLOT_SUBSCRIPTIONS, &mirror.subscriptions)?;
        self.write_slot(SLOT_EXPENSES, &mirror.expenses)?;
        Ok(())
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Vec<T> {
        let Some(raw) = self.session.get(slot) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(slot, %err, "discarding malformed session slot");
                Vec::new()
            }
        }
    }

    fn write_slot<T: Serialize>(&mut self, slot: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.session.set(slot, json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BillingCycle, Frequency, Mirror, NewExpense, NewSubscription, NewUser, RecurringExpense,
        Subscription, User,
    };
    use crate::store::MemorySession;

    fn sample_mirror() -> Mirror {
        let mut mirror = Mirror::default();
        mirror.users.push(User::synthesized(
            1,
            NewUser {
                username: "ana".into(),
                email: "a@x.com".into(),
            },
        ));
        mirror.subscriptions.push(Subscription::synthesized(
            2,
            NewSubscription {
                name: "Streaming".into(),
                description: Some("Family plan".into()),
                price: 29.9,
                billing_cycle: BillingCycle::Monthly,
                next_billing_date: None,
                category: Some("media".into()),
                user_id: 1,
            },
        ));
        mirror.expenses.push(RecurringExpense::synthesized(
            3,
            NewExpense {
                name: "Gym".into(),
                description: None,
                amount: 10.0,
                frequency: Frequency::Weekly,
                next_due_date: None,
                category: None,
                user_id: 1,
            },
        ));
        mirror
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut store = LocalStore::new(MemorySession::new());
        let mirror = sample_mirror();
        store.save_all(&mirror).expect("save mirror");
        let loaded = store.load_all();
        assert_eq!(loaded, mirror);
    }

    #[test]
    fn missing_slots_load_as_empty() {
        let store = LocalStore::new(MemorySession::new());
        let loaded = store.load_all();
        assert!(loaded.is_empty());
    }

    #[test]
    fn malformed_slot_fails_closed_to_empty() {
        let mut session = MemorySession::new();
        session.set(SLOT_USERS, "{not json".into());
        session.set(SLOT_SUBSCRIPTIONS, "[]".into());
        let store = LocalStore::new(session);
        let loaded = store.load_all();
        assert!(loaded.users.is_empty());
        assert!(loaded.subscriptions.is_empty());
    }

    #[test]
    fn save_rewrites_every_slot() {
        let mut store = LocalStore::new(MemorySession::new());
        store.save_all(&sample_mirror()).expect("first save");
        store.save_all(&Mirror::default()).expect("second save");
        let loaded = store.load_all();
        assert!(loaded.is_empty());
    }
}

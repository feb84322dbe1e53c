use serde::{Deserialize, Serialize};

use super::{EntityId, RecurringExpense, Subscription, User};

/// Label resolved for a `user_id` with no matching user. Dangling
/// references are tolerated, never an error.
pub const USER_NOT_FOUND: &str = "User not found";

/// In-memory copy of all entity collections, authoritative for rendering
/// and aggregation. Insertion order is display order: rebuilt wholesale on
/// load, appended-to on create, filtered on delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Mirror {
    pub users: Vec<User>,
    pub subscriptions: Vec<Subscription>,
    pub expenses: Vec<RecurringExpense>,
}

impl Mirror {
    /// Resolves the display name for an owning user, falling back to the
    /// [`USER_NOT_FOUND`] sentinel when the reference dangles.
    pub fn owner_label(&self, user_id: EntityId) -> &str {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .map(|user| user.username.as_str())
            .unwrap_or(USER_NOT_FOUND)
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.subscriptions.is_empty() && self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;

    #[test]
    fn owner_label_resolves_known_user() {
        let mut mirror = Mirror::default();
        mirror.users.push(User::synthesized(
            1,
            NewUser {
                username: "ana".into(),
                email: "a@x.com".into(),
            },
        ));
        assert_eq!(mirror.owner_label(1), "ana");
    }

    #[test]
    fn owner_label_falls_back_to_sentinel() {
        let mirror = Mirror::default();
        assert_eq!(mirror.owner_label(42), USER_NOT_FOUND);
    }
}

//! Domain models for tracked entities and the in-memory mirror.

pub mod expense;
pub mod mirror;
pub mod recurrence;
pub mod subscription;
pub mod user;

pub use expense::{Frequency, NewExpense, RecurringExpense};
pub use mirror::{Mirror, USER_NOT_FOUND};
pub use recurrence::{monthly_equivalent, MonthlyRate};
pub use subscription::{BillingCycle, NewSubscription, Subscription};
pub use user::{NewUser, User};

use std::collections::HashSet;

use chrono::Utc;

/// Opaque entity identifier. The remote API assigns ids on create; local
/// synthesis derives them from the current epoch milliseconds.
pub type EntityId = i64;

pub(crate) fn default_active() -> bool {
    true
}

/// Picks an id for a locally synthesized entity, guaranteed not to collide
/// with any id already present in the collection.
pub(crate) fn allocate_id(taken: &HashSet<EntityId>) -> EntityId {
    next_free_id(Utc::now().timestamp_millis(), taken)
}

fn next_free_id(seed: EntityId, taken: &HashSet<EntityId>) -> EntityId {
    let mut candidate = seed;
    while taken.contains(&candidate) {
        candidate += 1;
    }
    candidate
}

//! Remote CRUD surface and the startup connectivity probe.

pub mod http;

pub use http::HttpRemoteStore;

use crate::domain::{
    EntityId, NewExpense, NewSubscription, NewUser, RecurringExpense, Subscription, User,
};
use crate::errors::Result;

/// Abstraction over the remote tracking API. Each call is a single
/// request/response exchange with no retries; fallback policy lives in the
/// orchestrator, not here.
pub trait RemoteStore {
    fn list_users(&self) -> Result<Vec<User>>;
    fn create_user(&self, data: &NewUser) -> Result<User>;
    fn delete_user(&self, id: EntityId) -> Result<()>;

    fn list_subscriptions(&self) -> Result<Vec<Subscription>>;
    fn create_subscription(&self, data: &NewSubscription) -> Result<Subscription>;
    fn delete_subscription(&self, id: EntityId) -> Result<()>;

    fn list_expenses(&self) -> Result<Vec<RecurringExpense>>;
    fn create_expense(&self, data: &NewExpense) -> Result<RecurringExpense>;
    fn delete_expense(&self, id: EntityId) -> Result<()>;
}

/// Probes remote reachability with a single users-list call. Runs once at
/// application start; the resulting flag is the operation target for the
/// remainder of the session.
pub fn probe<R: RemoteStore>(remote: &R) -> bool {
    match remote.list_users() {
        Ok(_) => {
            tracing::info!("remote API reachable, starting in remote mode");
            true
        }
        Err(err) => {
            tracing::info!(%err, "remote API unreachable, starting in local mode");
            false
        }
    }
}

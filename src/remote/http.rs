use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::RemoteConfig;
use crate::domain::{
    EntityId, NewExpense, NewSubscription, NewUser, RecurringExpense, Subscription, User,
};
use crate::errors::{EntityKind, Operation, Result, SyncError};

use super::RemoteStore;

const USERS_RESOURCE: &str = "users";
const SUBSCRIPTIONS_RESOURCE: &str = "subscriptions";
const EXPENSES_RESOURCE: &str = "recurring-expenses";

/// Blocking HTTP client for the remote tracking API. JSON throughout, one
/// request per call, transport-default timeouts only.
#[derive(Debug, Clone)]
pub struct HttpRemoteStore {
    http: Client,
    base: String,
}

impl HttpRemoteStore {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base, resource)
    }

    fn list<T: DeserializeOwned>(&self, resource: &str, kind: EntityKind) -> Result<Vec<T>> {
        let op = Operation::List;
        let response = self
            .http
            .get(self.endpoint(resource))
            .send()
            .map_err(|source| SyncError::Network { kind, op, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::RemoteRejection {
                kind,
                op,
                status: status.as_u16(),
            });
        }
        response
            .json()
            .map_err(|source| SyncError::Network { kind, op, source })
    }

    fn create<P, T>(&self, resource: &str, kind: EntityKind, payload: &P) -> Result<T>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let op = Operation::Create;
        let response = self
            .http
            .post(self.endpoint(resource))
            .json(payload)
            .send()
            .map_err(|source| SyncError::Network { kind, op, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::RemoteRejection {
                kind,
                op,
                status: status.as_u16(),
            });
        }
        response
            .json()
            .map_err(|source| SyncError::Network { kind, op, source })
    }

    fn remove(&self, resource: &str, kind: EntityKind, id: EntityId) -> Result<()> {
        let op = Operation::Delete;
        let response = self
            .http
            .delete(format!("{}/{}", self.endpoint(resource), id))
            .send()
            .map_err(|source| SyncError::Network { kind, op, source })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SyncError::RemoteRejection {
                kind,
                op,
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}

impl RemoteStore for HttpRemoteStore {
    fn list_users(&self) -> Result<Vec<User>> {
        self.list(USERS_RESOURCE, EntityKind::User)
    }

    fn create_user(&self, data: &NewUser) -> Result<User> {
        self.create(USERS_RESOURCE, EntityKind::User, data)
    }

    fn delete_user(&self, id: EntityId) -> Result<()> {
        self.remove(USERS_RESOURCE, EntityKind::User, id)
    }

    fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
        self.list(SUBSCRIPTIONS_RESOURCE, EntityKind::Subscription)
    }

    fn create_subscription(&self, data: &NewSubscription) -> Result<Subscription> {
        self.create(SUBSCRIPTIONS_RESOURCE, EntityKind::Subscription, data)
    }

    fn delete_subscription(&self, id: EntityId) -> Result<()> {
        self.remove(SUBSCRIPTIONS_RESOURCE, EntityKind::Subscription, id)
    }

    fn list_expenses(&self) -> Result<Vec<RecurringExpense>> {
        self.list(EXPENSES_RESOURCE, EntityKind::Expense)
    }

    fn create_expense(&self, data: &NewExpense) -> Result<RecurringExpense> {
        self.create(EXPENSES_RESOURCE, EntityKind::Expense, data)
    }

    fn delete_expense(&self, id: EntityId) -> Result<()> {
        self.remove(EXPENSES_RESOURCE, EntityKind::Expense, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_resource() {
        let store = HttpRemoteStore::new(&RemoteConfig::default()).expect("client");
        assert_eq!(store.endpoint("users"), "http://localhost:5000/api/users");
    }

    #[test]
    fn trailing_slash_in_base_is_trimmed() {
        let config = RemoteConfig {
            base_url: "http://localhost:5000/api/".into(),
        };
        let store = HttpRemoteStore::new(&config).expect("client");
        assert_eq!(
            store.endpoint("recurring-expenses"),
            "http://localhost:5000/api/recurring-expenses"
        );
    }
}

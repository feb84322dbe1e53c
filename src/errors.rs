use std::fmt;

use thiserror::Error;

/// Entity collection a remote call was addressing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Subscription,
    Expense,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::User => "user",
            EntityKind::Subscription => "subscription",
            EntityKind::Expense => "recurring expense",
        };
        f.write_str(label)
    }
}

/// Operation that was attempted against the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Delete => "delete",
        };
        f.write_str(label)
    }
}

/// Error type that captures remote and local store failures.
///
/// Remote failures carry the entity kind and attempted operation; the
/// orchestrator converts them into local fallback, they are never surfaced
/// as uncaught faults.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{op} {kind} request failed: {source}")]
    Network {
        kind: EntityKind,
        op: Operation,
        source: reqwest::Error,
    },
    #[error("remote rejected {op} {kind}: HTTP {status}")]
    RemoteRejection {
        kind: EntityKind,
        op: Operation,
        status: u16,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::EntityId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a locally synthesized user when the remote is unavailable.
    pub fn synthesized(id: EntityId, data: NewUser) -> Self {
        Self {
            id,
            username: data.username,
            email: data.email,
            created_at: Utc::now(),
        }
    }
}

/// Creation payload; the store assigns the id and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{default_active, EntityId};

/// Recurrence cadence of an expense. Unrecognized values deserialize as
/// `Unknown` and contribute nothing to the monthly total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringExpense {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Non-negative by convention; not enforced here.
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub user_id: EntityId,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl RecurringExpense {
    /// Builds a locally synthesized expense, active by default.
    pub fn synthesized(id: EntityId, data: NewExpense) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: data.name,
            description: data.description,
            amount: data.amount,
            frequency: data.frequency,
            next_due_date: data.next_due_date,
            category: data.category,
            user_id: data.user_id,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Creation payload; the store assigns id, activity flag, and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExpense {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: f64,
    pub frequency: Frequency,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub user_id: EntityId,
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{default_active, EntityId};

/// Billing cadence of a subscription. Subscriptions have no daily cycle;
/// unrecognized values deserialize as `Unknown` and contribute nothing to
/// the monthly total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    Weekly,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Subscription {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Non-negative by convention; not enforced here.
    pub price: f64,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub next_billing_date: Option<NaiveDate>,
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

impl Subscription {
    /// Builds a locally synthesized subscription, active by default.
    pub fn synthesized(id: EntityId, data: NewSubscription) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: data.name,
            description: data.description,
            price: data.price,
            billing_cycle: data.billing_cycle,
            next_billing_date: data.next_billing_date,
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
pub struct NewSubscription {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub next_billing_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub user_id: EntityId,
}

//! Normalization of heterogeneous recurrence schedules to a monthly basis.

use super::{BillingCycle, Frequency};

/// Average weeks per month used for weekly cadences.
pub const WEEKS_PER_MONTH: f64 = 4.33;
/// Days per month used for daily cadences.
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Cadences that can be normalized to a monthly-equivalent amount.
pub trait MonthlyRate {
    fn monthly_equivalent(&self, amount: f64) -> f64;
}

impl MonthlyRate for BillingCycle {
    fn monthly_equivalent(&self, amount: f64) -> f64 {
        match self {
            BillingCycle::Monthly => amount,
            BillingCycle::Yearly => amount / MONTHS_PER_YEAR,
            BillingCycle::Weekly => amount * WEEKS_PER_MONTH,
            BillingCycle::Unknown => 0.0,
        }
    }
}

impl MonthlyRate for Frequency {
    fn monthly_equivalent(&self, amount: f64) -> f64 {
        match self {
            Frequency::Daily => amount * DAYS_PER_MONTH,
            Frequency::Weekly => amount * WEEKS_PER_MONTH,
            Frequency::Monthly => amount,
            Frequency::Yearly => amount / MONTHS_PER_YEAR,
            Frequency::Unknown => 0.0,
        }
    }
}

/// Maps an (amount, cadence) pair to its monthly-equivalent amount. Pure
/// and deterministic; unknown cadences contribute zero.
pub fn monthly_equivalent<U: MonthlyRate>(amount: f64, unit: &U) -> f64 {
    unit.monthly_equivalent(amount)
}

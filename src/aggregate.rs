//! Dashboard totals derived from the in-memory mirror.
//!
//! Always a full pass over the current mirror; no caching, no incremental
//! updates.

use crate::domain::{monthly_equivalent, Mirror, RecurringExpense, Subscription, User};

/// Derived dashboard values. `monthly_total` is the sum of all active
/// recurring costs converted to a monthly-equivalent basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub users: usize,
    pub active_subscriptions: usize,
    pub active_expenses: usize,
    pub monthly_total: f64,
}

/// Returns (user count, active subscription count, active expense count).
pub fn counts(mirror: &Mirror) -> (usize, usize, usize) {
    (
        mirror.users.len(),
        mirror.subscriptions.iter().filter(|s| s.is_active).count(),
        mirror.expenses.iter().filter(|e| e.is_active).count(),
    )
}

pub fn monthly_total(mirror: &Mirror) -> f64 {
    let subscriptions: f64 = mirror
        .subscriptions
        .iter()
        .filter(|s| s.is_active)
        .map(|s| monthly_equivalent(s.price, &s.billing_cycle))
        .sum();
    let expenses: f64 = mirror
        .expenses
        .iter()
        .filter(|e| e.is_active)
        .map(|e| monthly_equivalent(e.amount, &e.frequency))
        .sum();
    subscriptions + expenses
}

pub fn totals(mirror: &Mirror) -> Totals {
    let (users, active_subscriptions, active_expenses) = counts(mirror);
    Totals {
        users,
        active_subscriptions,
        active_expenses,
        monthly_total: monthly_total(mirror),
    }
}

/// Everything the presentation sink receives after a mutation: the three
/// entity sequences plus the derived totals. The core does not format,
/// render, or style them.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSnapshot<'a> {
    pub users: &'a [User],
    pub subscriptions: &'a [Subscription],
    pub expenses: &'a [RecurringExpense],
    pub totals: Totals,
}

pub fn snapshot(mirror: &Mirror) -> DashboardSnapshot<'_> {
    DashboardSnapshot {
        users: &mirror.users,
        subscriptions: &mirror.subscriptions,
        expenses: &mirror.expenses,
        totals: totals(mirror),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        BillingCycle, Frequency, NewExpense, NewSubscription, RecurringExpense, Subscription,
    };

    fn subscription(price: f64, billing_cycle: BillingCycle) -> Subscription {
        Subscription::synthesized(
            1,
            NewSubscription {
                name: "Streaming".into(),
                description: None,
                price,
                billing_cycle,
                next_billing_date: None,
                category: None,
                user_id: 1,
            },
        )
    }

    fn expense(amount: f64, frequency: Frequency) -> RecurringExpense {
        RecurringExpense::synthesized(
            2,
            NewExpense {
                name: "Gym".into(),
                description: None,
                amount,
                frequency,
                next_due_date: None,
                category: None,
                user_id: 1,
            },
        )
    }

    #[test]
    fn monthly_total_mixes_cycles_and_frequencies() {
        let mut mirror = Mirror::default();
        mirror
            .subscriptions
            .push(subscription(30.0, BillingCycle::Yearly));
        mirror.expenses.push(expense(10.0, Frequency::Weekly));

        // 30/12 + 10*4.33
        assert!((monthly_total(&mirror) - 45.8).abs() < 1e-9);
    }

    #[test]
    fn inactive_entities_are_excluded() {
        let mut mirror = Mirror::default();
        let mut inactive = expense(100.0, Frequency::Monthly);
        inactive.is_active = false;
        mirror.expenses.push(inactive);
        mirror.expenses.push(expense(10.0, Frequency::Monthly));

        let (_, _, active_expenses) = counts(&mirror);
        assert_eq!(active_expenses, 1);
        assert!((monthly_total(&mirror) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn repeated_reads_are_idempotent() {
        let mut mirror = Mirror::default();
        mirror
            .subscriptions
            .push(subscription(12.0, BillingCycle::Monthly));
        mirror.expenses.push(expense(2.0, Frequency::Daily));

        assert_eq!(counts(&mirror), counts(&mirror));
        assert_eq!(monthly_total(&mirror), monthly_total(&mirror));
    }

    #[test]
    fn snapshot_exposes_sequences_and_totals() {
        let mut mirror = Mirror::default();
        mirror
            .subscriptions
            .push(subscription(12.0, BillingCycle::Monthly));

        let view = snapshot(&mirror);
        assert_eq!(view.subscriptions.len(), 1);
        assert_eq!(view.totals.active_subscriptions, 1);
        assert!((view.totals.monthly_total - 12.0).abs() < 1e-9);
    }
}

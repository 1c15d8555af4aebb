//! Income, expense and subscription totals.
//!
//! Subscription rollups report magnitudes: expense amounts are negative in the
//! records but totals and remainders come back non-negative.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date_utils::{clamped_date, months_after};
use crate::models::{Subscription, Transaction};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NetIncome {
    pub total_income: i64,
    /// Sum of expense magnitudes.
    pub total_expenses: i64,
    /// May be negative.
    pub net_income: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionExpenses {
    pub total_expenses: i64,
    pub remaining_expenses: i64,
}

impl SubscriptionExpenses {
    pub fn paid_expenses(&self) -> i64 {
        self.total_expenses - self.remaining_expenses
    }
}

/// Which subscription rollup a view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollupScope {
    Monthly,
    Yearly,
}

impl RollupScope {
    pub fn rollup(&self, subscriptions: &[Subscription], today: NaiveDate) -> SubscriptionExpenses {
        match self {
            RollupScope::Monthly => monthly_subscriptions(subscriptions, today),
            RollupScope::Yearly => yearly_subscriptions(subscriptions, today),
        }
    }
}

pub fn net_income(transactions: &[Transaction]) -> NetIncome {
    let mut total_income: i64 = 0;
    let mut total_expenses: i64 = 0;

    for transaction in transactions {
        if transaction.is_expense() {
            total_expenses =
                total_expenses.saturating_add(transaction.amount_cents.saturating_abs());
        } else {
            total_income = total_income.saturating_add(transaction.amount_cents);
        }
    }

    NetIncome {
        total_income,
        total_expenses,
        net_income: total_income.saturating_sub(total_expenses),
    }
}

/// Subscription costs falling in the month containing `today`.
///
/// Counts every monthly subscription plus any subscription whose first billing
/// happened in this calendar month (in any year). A subscription is still
/// remaining when its billing day is later than today's day of month.
pub fn monthly_subscriptions(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> SubscriptionExpenses {
    let mut total: i64 = 0;
    let mut remaining: i64 = 0;

    for subscription in subscriptions
        .iter()
        .filter(|s| s.is_monthly() || s.first_billing_date.month() == today.month())
    {
        if subscription.first_billing_date.day() > today.day() {
            remaining = remaining.saturating_add(subscription.amount_cents);
        }
        total = total.saturating_add(subscription.amount_cents);
    }

    trace!(total, remaining, "Monthly subscription rollup");
    SubscriptionExpenses {
        total_expenses: total.saturating_abs(),
        remaining_expenses: remaining.saturating_abs(),
    }
}

/// Subscription costs for the year containing `today`.
///
/// The total projects every monthly subscription over twelve months and adds
/// each yearly subscription once. The remainder is computed on signed amounts
/// as
///
/// ```text
/// yearly_passed + monthly_sum * months_after_current - monthly_remaining
/// ```
///
/// where `yearly_passed` sums yearly subscriptions whose anniversary this year
/// is strictly before `today`, and `monthly_remaining` is the (non-negative)
/// remainder reported by [`monthly_subscriptions`]. The magnitude of the result
/// is returned. For expense-only input the current month's remainder therefore
/// adds to the remaining months instead of being counted a second time through
/// `monthly_sum`.
pub fn yearly_subscriptions(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> SubscriptionExpenses {
    let current_month = monthly_subscriptions(subscriptions, today);

    let mut monthly_sum: i64 = 0;
    let mut yearly_sum: i64 = 0;
    let mut yearly_passed: i64 = 0;

    for subscription in subscriptions {
        if subscription.is_yearly() {
            yearly_sum = yearly_sum.saturating_add(subscription.amount_cents);
            let anniversary = clamped_date(
                today.year(),
                subscription.first_billing_date.month(),
                subscription.first_billing_date.day(),
            );
            if anniversary < today {
                yearly_passed = yearly_passed.saturating_add(subscription.amount_cents);
            }
        }
        if subscription.is_monthly() {
            monthly_sum = monthly_sum.saturating_add(subscription.amount_cents);
        }
    }

    let remaining = yearly_passed
        .saturating_add(monthly_sum.saturating_mul(months_after(today)))
        .saturating_sub(current_month.remaining_expenses);
    let total = monthly_sum.saturating_mul(12).saturating_add(yearly_sum);

    trace!(total, remaining, "Yearly subscription rollup");
    SubscriptionExpenses {
        total_expenses: total.saturating_abs(),
        remaining_expenses: remaining.saturating_abs(),
    }
}

use chrono::Datelike;
use tracing::debug;

use crate::models::{Categorized, Filters, ScheduledSubscription, Transaction};

/// Transactions matching the account, category and date filters, most recent
/// first.
pub fn filter_transactions(transactions: &[Transaction], filters: &Filters) -> Vec<Transaction> {
    let mut filtered: Vec<Transaction> = transactions
        .iter()
        .filter(|t| {
            filters.account.matches(t.account_id)
                && filters.category.matches(t.category())
                && filters.date.matches(t.date)
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| b.date.cmp(&a.date));

    debug!(
        total = transactions.len(),
        matched = filtered.len(),
        "Filtered transactions"
    );
    filtered
}

/// Subscriptions matching the account and category filters, soonest due
/// first. The date filter does not apply to subscriptions.
pub fn filter_subscriptions(
    subscriptions: &[ScheduledSubscription],
    filters: &Filters,
) -> Vec<ScheduledSubscription> {
    let mut filtered: Vec<ScheduledSubscription> = subscriptions
        .iter()
        .filter(|s| {
            filters.account.matches(s.subscription.account_id)
                && filters.category.matches(s.category())
        })
        .cloned()
        .collect();

    filtered.sort_by_key(|s| s.next_billing_date);

    debug!(
        total = subscriptions.len(),
        matched = filtered.len(),
        "Filtered subscriptions"
    );
    filtered
}

/// Years that have at least one transaction, in first-seen order.
pub fn transaction_years(transactions: &[Transaction]) -> Vec<i32> {
    let mut years = Vec::new();
    for year in transactions.iter().map(|t| t.date.year()) {
        if !years.contains(&year) {
            years.push(year);
        }
    }
    years
}

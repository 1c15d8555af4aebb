//! Chart-ready label and series structures.
//!
//! Builders only reshape what the aggregators and rollups produce; the
//! presentation layer decides how to draw them.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date_utils::{days_in_month, short_month_name};
use crate::models::{Account, Categorized, DateFilter, Subscription, Transaction};
use crate::services::categories::category_amounts;
use crate::services::rollups::{net_income, RollupScope};

pub const INCOME_COLOR: &str = "#43a047";
pub const EXPENSE_COLOR: &str = "#f44336";

const HUE_STEP: usize = 55;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<i64>,
    pub colors: Vec<String>,
}

/// Generated color for the `index`-th series entry.
pub fn category_color(index: usize) -> String {
    format!("hsl({}, 100%, 70%)", (index * HUE_STEP) % 359)
}

/// Income and expenses over the selected period.
///
/// With a whole-year filter there is one bucket per month ("Jan".."Dec");
/// with a month filter there is one bucket per day ("Mar 1".."Mar 31").
/// Expenses are reported as magnitudes. Transactions outside the period are
/// ignored; callers normally pass the output of the period filter.
pub fn activity_chart(transactions: &[Transaction], period: &DateFilter) -> ChartData {
    let labels: Vec<String> = match period.month {
        None => (1..=12).map(|m| short_month_name(m).to_string()).collect(),
        Some(month) => {
            let name = short_month_name(month);
            (1..=days_in_month(period.year, month))
                .map(|day| format!("{} {}", name, day))
                .collect()
        }
    };

    let mut income = vec![0i64; labels.len()];
    let mut expenses = vec![0i64; labels.len()];

    for transaction in transactions.iter().filter(|t| period.matches(t.date)) {
        let bucket = match period.month {
            None => transaction.date.month0(),
            Some(_) => transaction.date.day0(),
        } as usize;
        if transaction.is_expense() {
            expenses[bucket] =
                expenses[bucket].saturating_add(transaction.amount_cents.saturating_abs());
        } else {
            income[bucket] = income[bucket].saturating_add(transaction.amount_cents);
        }
    }

    ChartData {
        labels,
        datasets: vec![
            Dataset {
                label: Some("income".into()),
                data: income,
                colors: vec![INCOME_COLOR.into()],
            },
            Dataset {
                label: Some("expenses".into()),
                data: expenses,
                colors: vec![EXPENSE_COLOR.into()],
            },
        ],
    }
}

/// Category totals, smallest first.
pub fn category_chart<T: Categorized>(items: &[T]) -> ChartData {
    let sorted = category_amounts(items).sorted_ascending();
    let colors = (0..sorted.len()).map(category_color).collect();
    let (labels, data) = sorted.into_iter().unzip();

    ChartData {
        labels,
        datasets: vec![Dataset {
            label: None,
            data,
            colors,
        }],
    }
}

/// One bar per account balance, in the order given.
pub fn accounts_chart(accounts: &[Account]) -> ChartData {
    ChartData {
        labels: accounts.iter().map(|a| a.name.clone()).collect(),
        datasets: vec![Dataset {
            label: None,
            data: accounts.iter().map(|a| a.balance_cents).collect(),
            colors: (0..accounts.len()).map(category_color).collect(),
        }],
    }
}

/// Paid versus remaining subscription costs for the month or year.
pub fn subscriptions_chart(
    subscriptions: &[Subscription],
    scope: RollupScope,
    today: NaiveDate,
) -> ChartData {
    let rollup = scope.rollup(subscriptions, today);
    two_slice_chart(
        ["paid", "remaining"],
        [rollup.paid_expenses(), rollup.remaining_expenses],
    )
}

/// Total income versus total expenses.
pub fn transactions_chart(transactions: &[Transaction]) -> ChartData {
    let totals = net_income(transactions);
    two_slice_chart(
        ["income", "expenses"],
        [totals.total_income, totals.total_expenses],
    )
}

fn two_slice_chart(labels: [&str; 2], data: [i64; 2]) -> ChartData {
    ChartData {
        labels: labels.iter().map(|l| l.to_string()).collect(),
        datasets: vec![Dataset {
            label: None,
            data: data.to_vec(),
            colors: vec![INCOME_COLOR.into(), EXPENSE_COLOR.into()],
        }],
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::{schedule_subscriptions, Filters, ScheduledSubscription, Subscription, Transaction};
use crate::services::categories::distinct_categories;
use crate::services::charts::{
    accounts_chart, activity_chart, category_chart, subscriptions_chart, transactions_chart,
    ChartData,
};
use crate::services::period_filter::{filter_subscriptions, filter_transactions, transaction_years};
use crate::services::rollups::{
    monthly_subscriptions, net_income, yearly_subscriptions, NetIncome, RollupScope,
    SubscriptionExpenses,
};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportCharts {
    pub activity: ChartData,
    pub transaction_categories: ChartData,
    pub subscription_categories: ChartData,
    pub accounts: ChartData,
    pub income_expenses: ChartData,
    pub monthly_subscriptions: ChartData,
    pub yearly_subscriptions: ChartData,
}

/// Everything the statistics view shows for one filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsReport {
    pub today: NaiveDate,
    pub filters: Filters,
    pub transactions: Vec<Transaction>,
    pub subscriptions: Vec<ScheduledSubscription>,
    pub net_income: NetIncome,
    pub monthly_subscriptions: SubscriptionExpenses,
    pub yearly_subscriptions: SubscriptionExpenses,
    /// Category choices for the filter selectors, drawn from every record.
    pub categories: Vec<String>,
    pub years: Vec<i32>,
    pub charts: ReportCharts,
}

impl StatisticsReport {
    /// Subscription rollups cover the subscriptions left after the account
    /// and category filters; the date filter only narrows transactions.
    pub fn build(snapshot: &Snapshot, filters: &Filters, today: NaiveDate) -> Self {
        let transactions = filter_transactions(&snapshot.transactions, filters);
        let scheduled = schedule_subscriptions(&snapshot.subscriptions, today);
        let subscriptions = filter_subscriptions(&scheduled, filters);
        let plain: Vec<Subscription> = subscriptions
            .iter()
            .map(|s| s.subscription.clone())
            .collect();

        let mut categories = distinct_categories(&snapshot.transactions);
        for category in distinct_categories(&snapshot.subscriptions) {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let charts = ReportCharts {
            activity: activity_chart(&transactions, &filters.date),
            transaction_categories: category_chart(&transactions),
            subscription_categories: category_chart(&subscriptions),
            accounts: accounts_chart(&snapshot.accounts),
            income_expenses: transactions_chart(&transactions),
            monthly_subscriptions: subscriptions_chart(&plain, RollupScope::Monthly, today),
            yearly_subscriptions: subscriptions_chart(&plain, RollupScope::Yearly, today),
        };

        debug!(
            %today,
            transactions = transactions.len(),
            subscriptions = subscriptions.len(),
            "Built statistics report"
        );

        Self {
            today,
            filters: filters.clone(),
            net_income: net_income(&transactions),
            monthly_subscriptions: monthly_subscriptions(&plain, today),
            yearly_subscriptions: yearly_subscriptions(&plain, today),
            categories,
            years: transaction_years(&snapshot.transactions),
            transactions,
            subscriptions,
            charts,
        }
    }
}

//! Shared fixtures for integration tests.
//!
//! `LedgerBuilder` assembles a `Snapshot` record by record so each test only
//! spells out the fields it cares about.

#![allow(dead_code)]

use chrono::NaiveDate;
use tally::models::{Account, BillingCycle, Subscription, Transaction};
use tally::snapshot::Snapshot;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

#[derive(Default)]
pub struct LedgerBuilder {
    snapshot: Snapshot,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account; ids are assigned in insertion order starting at 1.
    pub fn account(mut self, name: &str, balance_cents: i64) -> Self {
        let id = self.snapshot.accounts.len() as i64 + 1;
        self.snapshot.accounts.push(Account {
            id,
            name: name.into(),
            account_type: "Checking".into(),
            balance_cents,
        });
        self
    }

    pub fn transaction(
        mut self,
        on: &str,
        account_id: i64,
        category: Option<&str>,
        amount_cents: i64,
    ) -> Self {
        let id = self.snapshot.transactions.len() as i64 + 1;
        self.snapshot.transactions.push(Transaction {
            id,
            date: date(on),
            description: format!("transaction {id}"),
            category: category.map(String::from),
            amount_cents,
            account_id,
        });
        self
    }

    pub fn subscription(
        mut self,
        name: &str,
        first_billing: &str,
        cycle: BillingCycle,
        amount_cents: i64,
    ) -> Self {
        let id = self.snapshot.subscriptions.len() as i64 + 1;
        self.snapshot.subscriptions.push(Subscription {
            id,
            name: name.into(),
            first_billing_date: date(first_billing),
            cycle,
            category: None,
            amount_cents,
            account_id: 1,
        });
        self
    }

    /// Sets the category of the most recently added subscription.
    pub fn categorized(mut self, category: &str) -> Self {
        if let Some(last) = self.snapshot.subscriptions.last_mut() {
            last.category = Some(category.into());
        }
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

/// Two accounts, a spread of 2020/2021 transactions and three subscriptions.
pub fn household() -> Snapshot {
    LedgerBuilder::new()
        .account("Personal", 420042)
        .account("Savings", 1000000)
        .transaction("2021-01-05", 1, None, 300000)
        .transaction("2021-01-20", 1, Some("Food"), -4000)
        .transaction("2021-02-14", 1, Some("food"), -2500)
        .transaction("2021-03-01", 2, Some("Rent"), -90000)
        .transaction("2020-12-24", 1, Some("Gifts"), -15000)
        .transaction("2021-03-25", 1, None, 300000)
        .subscription("Netflix", "2020-07-11", BillingCycle::Monthly, -8900)
        .categorized("Entertainment")
        .subscription("Gym", "2020-01-20", BillingCycle::Monthly, -30000)
        .subscription("Insurance", "2019-02-01", BillingCycle::Yearly, -120000)
        .categorized("Insurance")
        .build()
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Categorized;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub category: Option<String>,
    pub amount_cents: i64,
    pub account_id: i64,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.amount_cents < 0
    }
}

impl Categorized for Transaction {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn amount_cents(&self) -> i64 {
        self.amount_cents
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewTransaction {
    pub date: String,
    pub description: String,
    pub category: Option<String>,
    pub amount: String,
    pub account_id: Option<i64>,
}

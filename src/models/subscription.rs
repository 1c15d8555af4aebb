use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Categorized;
use crate::date_utils::next_billing_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(BillingCycle::Monthly),
            "yearly" => Some(BillingCycle::Yearly),
            _ => None,
        }
    }
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    pub first_billing_date: NaiveDate,
    pub cycle: BillingCycle,
    pub category: Option<String>,
    pub amount_cents: i64,
    pub account_id: i64,
}

impl Subscription {
    pub fn is_monthly(&self) -> bool {
        self.cycle == BillingCycle::Monthly
    }

    pub fn is_yearly(&self) -> bool {
        self.cycle == BillingCycle::Yearly
    }

    /// Attach the next billing date as seen from `today`.
    pub fn scheduled(&self, today: NaiveDate) -> ScheduledSubscription {
        ScheduledSubscription {
            next_billing_date: next_billing_date(self.first_billing_date, self.cycle, today),
            subscription: self.clone(),
        }
    }
}

impl Categorized for Subscription {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn amount_cents(&self) -> i64 {
        self.amount_cents
    }
}

/// A subscription annotated with its projected next billing date. The date is
/// derived on load and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledSubscription {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub next_billing_date: NaiveDate,
}

impl Categorized for ScheduledSubscription {
    fn category(&self) -> Option<&str> {
        self.subscription.category()
    }

    fn amount_cents(&self) -> i64 {
        self.subscription.amount_cents
    }
}

/// Project every subscription against one shared `today`.
pub fn schedule_subscriptions(
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> Vec<ScheduledSubscription> {
    subscriptions.iter().map(|s| s.scheduled(today)).collect()
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewSubscription {
    pub name: String,
    pub first_billing_date: String,
    pub cycle: String,
    pub category: Option<String>,
    pub amount: String,
    pub account_id: Option<i64>,
}

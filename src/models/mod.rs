pub mod account;
pub mod filters;
pub mod settings;
pub mod subscription;
pub mod transaction;

pub use account::{Account, NewAccount};
pub use filters::{AccountFilter, CategoryFilter, DateFilter, Filters};
pub use settings::{DateFormat, Settings};
pub use subscription::{
    schedule_subscriptions, BillingCycle, NewSubscription, ScheduledSubscription, Subscription,
};
pub use transaction::{NewTransaction, Transaction};

/// Records that carry an optional category and a signed amount.
pub trait Categorized {
    /// The category, with empty strings treated as absent.
    fn category(&self) -> Option<&str>;
    fn amount_cents(&self) -> i64;
}

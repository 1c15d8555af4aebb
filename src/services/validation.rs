//! Shape checks for records entered in forms or read from import files.
//!
//! Validation never panics and never produces user-facing text of its own;
//! callers get a [`ValidationError`] kind and decide whether to block a form
//! or reject an import row.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::date_utils::parse_iso_date;
use crate::models::{
    Account, BillingCycle, NewAccount, NewSubscription, NewTransaction, Subscription, Transaction,
};

static CURRENCY_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]\d*(\.\d+)?$").expect("valid amount pattern"));

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("name must not be blank")]
    BlankName,
    #[error("description must not be blank")]
    BlankDescription,
    #[error("account type must not be blank")]
    BlankType,
    #[error("amount is not a valid currency amount")]
    InvalidAmount,
    #[error("date is not a valid YYYY-MM-DD date")]
    InvalidDate,
    #[error("billing cycle must be `monthly` or `yearly`")]
    InvalidCycle,
    #[error("month must be between 0 and 11, or -1 for all months")]
    InvalidMonth,
    #[error("account filter must be `All` or an account id")]
    InvalidAccountFilter,
    #[error("currency code must be three letters")]
    InvalidCurrencyCode,
    #[error("unknown account")]
    UnknownAccount,
    #[error("an account with the same name already exists")]
    DuplicateAccountName,
}

/// An account that passed validation but has no identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub name: String,
    pub account_type: String,
    pub balance_cents: i64,
}

impl AccountDraft {
    pub fn into_account(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            account_type: self.account_type,
            balance_cents: self.balance_cents,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub category: Option<String>,
    pub amount_cents: i64,
    pub account_id: i64,
}

impl TransactionDraft {
    pub fn into_transaction(self, id: i64) -> Transaction {
        Transaction {
            id,
            date: self.date,
            description: self.description,
            category: self.category,
            amount_cents: self.amount_cents,
            account_id: self.account_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub first_billing_date: NaiveDate,
    pub cycle: BillingCycle,
    pub category: Option<String>,
    pub amount_cents: i64,
    pub account_id: i64,
}

impl SubscriptionDraft {
    pub fn into_subscription(self, id: i64) -> Subscription {
        Subscription {
            id,
            name: self.name,
            first_billing_date: self.first_billing_date,
            cycle: self.cycle,
            category: self.category,
            amount_cents: self.amount_cents,
            account_id: self.account_id,
        }
    }
}

pub fn is_valid_currency_amount(s: &str) -> bool {
    CURRENCY_AMOUNT.is_match(s)
}

/// Three characters, none of them digits, whitespace or punctuation.
pub fn is_valid_currency_code(code: &str) -> bool {
    code.chars().count() == 3
        && code
            .chars()
            .all(|c| !c.is_ascii_digit() && !c.is_whitespace() && !c.is_ascii_punctuation())
}

/// Largest accepted amount magnitude in cents (one trillion currency units).
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000_000_000;

/// Convert a decimal amount to cents, rounding half away from zero.
///
/// Digits are converted exactly; amounts above [`MAX_AMOUNT_CENTS`] are
/// rejected.
pub fn amount_to_cents(s: &str) -> Result<i64, ValidationError> {
    if !is_valid_currency_amount(s) {
        return Err(ValidationError::InvalidAmount);
    }
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    let whole: i64 = whole.parse().map_err(|_| ValidationError::InvalidAmount)?;
    let mut fraction_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
    let tenths = fraction_digits.next().unwrap_or(0);
    let hundredths = fraction_digits.next().unwrap_or(0);
    let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
        .filter(|c| *c <= MAX_AMOUNT_CENTS)
        .ok_or(ValidationError::InvalidAmount)?;

    Ok(if negative { -cents } else { cents })
}

pub fn validate_account(account: &NewAccount) -> Result<AccountDraft, ValidationError> {
    require("name", &account.name)?;
    require("type", &account.account_type)?;
    require("balance", &account.balance)?;

    let name = account.name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }
    let account_type = account.account_type.trim();
    if account_type.is_empty() {
        return Err(ValidationError::BlankType);
    }
    let balance_cents = amount_to_cents(account.balance.trim())?;

    Ok(AccountDraft {
        name: name.to_string(),
        account_type: account_type.to_string(),
        balance_cents,
    })
}

pub fn validate_transaction(
    transaction: &NewTransaction,
) -> Result<TransactionDraft, ValidationError> {
    require("date", &transaction.date)?;
    require("description", &transaction.description)?;
    require("amount", &transaction.amount)?;
    let account_id = transaction
        .account_id
        .ok_or(ValidationError::MissingField("account"))?;

    let date = parse_iso_date(&transaction.date).ok_or(ValidationError::InvalidDate)?;
    let description = transaction.description.trim();
    if description.is_empty() {
        return Err(ValidationError::BlankDescription);
    }
    let amount_cents = amount_to_cents(transaction.amount.trim())?;

    Ok(TransactionDraft {
        date,
        description: description.to_string(),
        category: normalize_category(transaction.category.as_deref()),
        amount_cents,
        account_id,
    })
}

pub fn validate_subscription(
    subscription: &NewSubscription,
) -> Result<SubscriptionDraft, ValidationError> {
    require("name", &subscription.name)?;
    require("first_billing_date", &subscription.first_billing_date)?;
    require("cycle", &subscription.cycle)?;
    require("amount", &subscription.amount)?;
    let account_id = subscription
        .account_id
        .ok_or(ValidationError::MissingField("account"))?;

    let first_billing_date =
        parse_iso_date(&subscription.first_billing_date).ok_or(ValidationError::InvalidDate)?;
    let cycle = BillingCycle::parse(subscription.cycle.trim()).ok_or(ValidationError::InvalidCycle)?;
    let name = subscription.name.trim();
    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }
    let amount_cents = amount_to_cents(subscription.amount.trim())?;

    Ok(SubscriptionDraft {
        name: name.to_string(),
        first_billing_date,
        cycle,
        category: normalize_category(subscription.category.as_deref()),
        amount_cents,
        account_id,
    })
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn normalize_category(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

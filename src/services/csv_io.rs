//! Flat CSV layouts for moving records in and out of the tracker.
//!
//! Exports drop record ids and replace account ids with account names;
//! imports map names back to ids and validate every row. An import stops at
//! the first bad row and reports its row number, counting the header as row 1.

use std::io;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};
use crate::format::format_cents;
use crate::models::{Account, NewAccount, NewSubscription, NewTransaction, Subscription, Transaction};
use crate::services::accounts::AccountDirectory;
use crate::services::validation::{
    validate_account, validate_subscription, validate_transaction, AccountDraft,
    SubscriptionDraft, TransactionDraft, ValidationError,
};

const PARSE_ERROR: &str = "Parsing error.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Accounts,
    Transactions,
    Subscriptions,
}

impl ImportKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ImportKind::Accounts => "accounts.csv",
            ImportKind::Transactions => "transactions.csv",
            ImportKind::Subscriptions => "subscriptions.csv",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AccountRow {
    name: String,
    #[serde(rename = "type")]
    account_type: String,
    balance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRow {
    date: String,
    description: String,
    account: String,
    category: Option<String>,
    amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SubscriptionRow {
    name: String,
    #[serde(rename = "firstBillingDate")]
    first_billing_date: String,
    cycle: String,
    account: String,
    category: Option<String>,
    amount: String,
}

pub fn write_accounts<W: io::Write>(writer: W, accounts: &[Account]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for account in accounts {
        wtr.serialize(AccountRow {
            name: account.name.clone(),
            account_type: account.account_type.clone(),
            balance: format_cents(account.balance_cents),
        })?;
    }
    wtr.flush()?;
    debug!(row_count = accounts.len(), "Exported accounts");
    Ok(())
}

/// Unknown account ids are written as an empty account name.
pub fn write_transactions<W: io::Write>(
    writer: W,
    transactions: &[Transaction],
    directory: &AccountDirectory,
) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for transaction in transactions {
        wtr.serialize(TransactionRow {
            date: transaction.date.to_string(),
            description: transaction.description.clone(),
            account: directory
                .name_of(transaction.account_id)
                .unwrap_or_default()
                .to_string(),
            category: transaction.category.clone(),
            amount: format_cents(transaction.amount_cents),
        })?;
    }
    wtr.flush()?;
    debug!(row_count = transactions.len(), "Exported transactions");
    Ok(())
}

pub fn write_subscriptions<W: io::Write>(
    writer: W,
    subscriptions: &[Subscription],
    directory: &AccountDirectory,
) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for subscription in subscriptions {
        wtr.serialize(SubscriptionRow {
            name: subscription.name.clone(),
            first_billing_date: subscription.first_billing_date.to_string(),
            cycle: subscription.cycle.to_string(),
            account: directory
                .name_of(subscription.account_id)
                .unwrap_or_default()
                .to_string(),
            category: subscription.category.clone(),
            amount: format_cents(subscription.amount_cents),
        })?;
    }
    wtr.flush()?;
    debug!(row_count = subscriptions.len(), "Exported subscriptions");
    Ok(())
}

/// A one-row example file showing the expected columns.
pub fn sample_csv(kind: ImportKind) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    match kind {
        ImportKind::Accounts => wtr.serialize(AccountRow {
            name: "Personal".into(),
            account_type: "Checking".into(),
            balance: "4200.42".into(),
        })?,
        ImportKind::Transactions => wtr.serialize(TransactionRow {
            date: "2020-07-11".into(),
            description: "Lunch with Alice and Bob".into(),
            account: "Personal".into(),
            category: Some("Food".into()),
            amount: "-99.99".into(),
        })?,
        ImportKind::Subscriptions => wtr.serialize(SubscriptionRow {
            name: "Netflix".into(),
            first_billing_date: "2020-07-11".into(),
            cycle: "monthly".into(),
            account: "Personal".into(),
            category: Some("Entertainment".into()),
            amount: "-89".into(),
        })?,
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Parse accounts, rejecting names that already exist in `existing` or earlier
/// in the same file.
pub fn read_accounts<R: io::Read>(
    reader: R,
    existing: &AccountDirectory,
) -> AppResult<Vec<AccountDraft>> {
    let mut seen = existing.clone();
    let accounts = read_rows(reader, |row: AccountRow| {
        if seen.contains_name(&row.name) {
            return Err(ValidationError::DuplicateAccountName);
        }
        let draft = validate_account(&NewAccount {
            name: row.name,
            account_type: row.account_type,
            balance: row.balance,
        })?;
        seen.insert(0, draft.name.clone());
        Ok(draft)
    })?;
    debug!(row_count = accounts.len(), "Imported accounts");
    Ok(accounts)
}

pub fn read_transactions<R: io::Read>(
    reader: R,
    directory: &AccountDirectory,
) -> AppResult<Vec<TransactionDraft>> {
    let transactions = read_rows(reader, |row: TransactionRow| {
        let account_id = directory
            .id_of(&row.account)
            .ok_or(ValidationError::UnknownAccount)?;
        validate_transaction(&NewTransaction {
            date: row.date,
            description: row.description,
            category: row.category,
            amount: row.amount,
            account_id: Some(account_id),
        })
    })?;
    debug!(row_count = transactions.len(), "Imported transactions");
    Ok(transactions)
}

pub fn read_subscriptions<R: io::Read>(
    reader: R,
    directory: &AccountDirectory,
) -> AppResult<Vec<SubscriptionDraft>> {
    let subscriptions = read_rows(reader, |row: SubscriptionRow| {
        let account_id = directory
            .id_of(&row.account)
            .ok_or(ValidationError::UnknownAccount)?;
        validate_subscription(&NewSubscription {
            name: row.name,
            first_billing_date: row.first_billing_date,
            cycle: row.cycle,
            category: row.category,
            amount: row.amount,
            account_id: Some(account_id),
        })
    })?;
    debug!(row_count = subscriptions.len(), "Imported subscriptions");
    Ok(subscriptions)
}

fn read_rows<R, Row, T, F>(reader: R, mut convert: F) -> AppResult<Vec<T>>
where
    R: io::Read,
    Row: for<'de> Deserialize<'de>,
    F: FnMut(Row) -> Result<T, ValidationError>,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut parsed = Vec::new();
    for (row_idx, result) in rdr.deserialize::<Row>().enumerate() {
        let row_number = row_idx + 2;

        let row = result.map_err(|e| {
            warn!(row = row_number, error = %e, "Aborting import on unreadable row");
            AppError::import(row_number, PARSE_ERROR)
        })?;

        let record = convert(row).map_err(|e| {
            warn!(row = row_number, error = %e, "Aborting import on invalid row");
            AppError::import(row_number, e.to_string())
        })?;
        parsed.push(record);
    }
    Ok(parsed)
}

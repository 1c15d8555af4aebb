use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{Account, Subscription, Transaction};

/// Every record the engine reads, as handed over by the storage layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub subscriptions: Vec<Subscription>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::NotFound(format!(
                "snapshot file {}",
                path.display()
            )));
        }
        let snapshot = Self::from_json(&fs::read_to_string(path)?)?;
        debug!(
            path = %path.display(),
            accounts = snapshot.accounts.len(),
            transactions = snapshot.transactions.len(),
            subscriptions = snapshot.subscriptions.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn account(&self, account_id: i64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == account_id)
    }
}

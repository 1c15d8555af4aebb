use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    /// Free text, e.g. "Checking" or "Savings".
    pub account_type: String,
    pub balance_cents: i64,
}

/// An account as entered in a form or read from an import file, before
/// validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewAccount {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: String,
}

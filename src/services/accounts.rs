use crate::models::{Account, Transaction};

/// Name of the account with `account_id`, or an empty string when the id is
/// unknown.
pub fn account_name(accounts: &[Account], account_id: i64) -> &str {
    accounts
        .iter()
        .find(|a| a.id == account_id)
        .map(|a| a.name.as_str())
        .unwrap_or("")
}

/// Id/name lookups over an account snapshot, kept in the snapshot's order.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    entries: Vec<(i64, String)>,
}

impl AccountDirectory {
    pub fn new(accounts: &[Account]) -> Self {
        Self {
            entries: accounts.iter().map(|a| (a.id, a.name.clone())).collect(),
        }
    }

    pub fn name_of(&self, account_id: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == account_id)
            .map(|(_, name)| name.as_str())
    }

    /// Names are compared exactly.
    pub fn id_of(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(_, n)| n == name)
            .map(|(id, _)| *id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.id_of(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &str)> {
        self.entries.iter().map(|(id, name)| (*id, name.as_str()))
    }

    pub(crate) fn insert(&mut self, account_id: i64, name: String) {
        self.entries.push((account_id, name));
    }
}

/// The two accounts used by the most transactions.
///
/// Falls back to the first two accounts in the given order when fewer than two
/// known accounts appear in `transactions`.
pub fn most_used_accounts<'a>(
    accounts: &'a [Account],
    transactions: &[Transaction],
) -> Vec<&'a Account> {
    let mut counts: Vec<(i64, usize)> = Vec::new();
    for transaction in transactions {
        match counts.iter_mut().find(|(id, _)| *id == transaction.account_id) {
            Some((_, count)) => *count += 1,
            None => counts.push((transaction.account_id, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let used: Vec<&Account> = counts
        .iter()
        .filter_map(|(id, _)| accounts.iter().find(|a| a.id == *id))
        .collect();

    if used.len() < 2 {
        return accounts.iter().take(2).collect();
    }
    used.into_iter().take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn account(id: i64, name: &str) -> Account {
        Account {
            id,
            name: name.into(),
            account_type: "Checking".into(),
            balance_cents: 0,
        }
    }

    fn tx(account_id: i64) -> Transaction {
        Transaction {
            id: 0,
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            description: "t".into(),
            category: None,
            amount_cents: -1,
            account_id,
        }
    }

    fn accounts() -> Vec<Account> {
        vec![account(1, "Personal"), account(2, "Savings"), account(3, "Card")]
    }

    #[test]
    fn test_account_name() {
        let accounts = accounts();
        assert_eq!(account_name(&accounts, 2), "Savings");
        assert_eq!(account_name(&accounts, 42), "");
    }

    #[test]
    fn test_directory_lookups() {
        let directory = AccountDirectory::new(&accounts());
        assert_eq!(directory.name_of(3), Some("Card"));
        assert_eq!(directory.id_of("Personal"), Some(1));
        assert_eq!(directory.id_of("personal"), None);
        let order: Vec<i64> = directory.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_most_used_accounts() {
        let accounts = accounts();
        let transactions = vec![tx(3), tx(2), tx(3), tx(1), tx(3), tx(2)];
        let used: Vec<i64> = most_used_accounts(&accounts, &transactions)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(used, vec![3, 2]);
    }

    #[test]
    fn test_most_used_accounts_fallback() {
        let accounts = accounts();
        let used: Vec<i64> = most_used_accounts(&accounts, &[tx(3), tx(3)])
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(used, vec![1, 2]);

        let used = most_used_accounts(&accounts, &[tx(99), tx(98)]);
        assert_eq!(used.len(), 2);
        assert_eq!(used[0].id, 1);

        assert!(most_used_accounts(&[], &[tx(1)]).is_empty());
    }
}

use serde::Serialize;
use tracing::trace;

use crate::models::Categorized;

/// Bucket key for items without a category.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Category totals in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals(Vec<(String, i64)>);

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<i64> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn names(&self) -> Vec<&str> {
        self.0.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Smallest total first. Ties keep first-seen order.
    pub fn sorted_ascending(&self) -> Vec<(String, i64)> {
        let mut sorted = self.0.clone();
        sorted.sort_by_key(|(_, total)| *total);
        sorted
    }

    /// Largest total first. Ties keep first-seen order.
    pub fn sorted_descending(&self) -> Vec<(String, i64)> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    fn add(&mut self, category: String, amount_cents: i64) {
        match self.0.iter_mut().find(|(name, _)| *name == category) {
            Some((_, total)) => *total = total.saturating_add(amount_cents),
            None => self.0.push((category, amount_cents)),
        }
    }
}

/// Sum signed amounts per category. Names are lower-cased before grouping so
/// "Food" and "food" share a bucket; missing categories go to
/// [`UNCATEGORIZED`].
pub fn category_amounts<T: Categorized>(items: &[T]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();

    for item in items {
        let category = item
            .category()
            .map(str::to_lowercase)
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        totals.add(category, item.amount_cents());
    }

    trace!(
        item_count = items.len(),
        category_count = totals.len(),
        "Aggregated category amounts"
    );
    totals
}

/// Unique category names in first-seen order, compared case-sensitively.
pub fn distinct_categories<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in items.iter().filter_map(|item| item.category()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transaction;
    use chrono::NaiveDate;

    fn tx(category: Option<&str>, amount_cents: i64) -> Transaction {
        Transaction {
            id: 0,
            date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            description: "test".into(),
            category: category.map(String::from),
            amount_cents,
            account_id: 1,
        }
    }

    #[test]
    fn test_empty_input() {
        let totals = category_amounts::<Transaction>(&[]);
        assert!(totals.is_empty());
        assert!(distinct_categories::<Transaction>(&[]).is_empty());
    }

    #[test]
    fn test_case_insensitive_merge() {
        let items = vec![tx(Some("Food"), -1000), tx(Some("food"), -250)];
        let totals = category_amounts(&items);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get("food"), Some(-1250));
        assert_eq!(totals.get("Food"), None);
    }

    #[test]
    fn test_uncategorized_bucket_and_signs() {
        let items = vec![
            tx(None, -500),
            tx(Some("Salary"), 300000),
            tx(Some(""), -100),
            tx(Some("Refunds"), 200),
            tx(Some("refunds"), -50),
        ];
        let totals = category_amounts(&items);
        assert_eq!(totals.get(UNCATEGORIZED), Some(-600));
        assert_eq!(totals.get("salary"), Some(300000));
        assert_eq!(totals.get("refunds"), Some(150));
    }

    #[test]
    fn test_first_seen_order() {
        let items = vec![
            tx(Some("Rent"), -900),
            tx(None, -10),
            tx(Some("Food"), -50),
            tx(Some("rent"), -100),
        ];
        let totals = category_amounts(&items);
        assert_eq!(totals.names(), vec!["rent", UNCATEGORIZED, "food"]);
    }

    #[test]
    fn test_sorted_views() {
        let items = vec![
            tx(Some("Food"), -50),
            tx(Some("Rent"), -900),
            tx(Some("Salary"), 3000),
        ];
        let totals = category_amounts(&items);
        let asc: Vec<String> = totals.sorted_ascending().into_iter().map(|(n, _)| n).collect();
        assert_eq!(asc, vec!["rent", "food", "salary"]);
        let desc: Vec<String> = totals.sorted_descending().into_iter().map(|(n, _)| n).collect();
        assert_eq!(desc, vec!["salary", "food", "rent"]);
        // input order is untouched
        assert_eq!(totals.names(), vec!["food", "rent", "salary"]);
    }

    #[test]
    fn test_distinct_categories_case_sensitive() {
        let items = vec![
            tx(Some("Food"), -1),
            tx(None, -1),
            tx(Some("food"), -1),
            tx(Some("Food"), -1),
            tx(Some("Rent"), -1),
        ];
        assert_eq!(distinct_categories(&items), vec!["Food", "food", "Rent"]);
    }
}

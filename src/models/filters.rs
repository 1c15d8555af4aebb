use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::services::validation::ValidationError;

pub const ALL_LABEL: &str = "All";
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountFilter {
    All,
    Id(i64),
}

impl AccountFilter {
    /// Parse the account selector value: "All" or an account id as text.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        if s == ALL_LABEL {
            return Ok(AccountFilter::All);
        }
        s.parse::<i64>()
            .map(AccountFilter::Id)
            .map_err(|_| ValidationError::InvalidAccountFilter)
    }

    pub fn matches(&self, account_id: i64) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::Id(id) => *id == account_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Uncategorized,
    Named(String),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> Self {
        match s {
            ALL_LABEL => CategoryFilter::All,
            UNCATEGORIZED_LABEL => CategoryFilter::Uncategorized,
            name => CategoryFilter::Named(name.to_string()),
        }
    }

    /// Named categories match case-sensitively.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match (self, category) {
            (CategoryFilter::All, _) => true,
            (CategoryFilter::Uncategorized, None) => true,
            (CategoryFilter::Named(name), Some(category)) => name == category,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    /// 1-based month; `None` selects the whole year.
    pub month: Option<u32>,
    pub year: i32,
}

impl DateFilter {
    pub fn year(year: i32) -> Self {
        Self { month: None, year }
    }

    pub fn month(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year,
        }
    }

    /// Build from the month selector convention: 0-11, or -1 for all months.
    pub fn from_selector(month: i32, year: i32) -> Result<Self, ValidationError> {
        match month {
            -1 => Ok(Self::year(year)),
            0..=11 => Ok(Self::month(month as u32 + 1, year)),
            _ => Err(ValidationError::InvalidMonth),
        }
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        date.year() == self.year && self.month.is_none_or(|m| m == date.month())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    pub account: AccountFilter,
    pub category: CategoryFilter,
    pub date: DateFilter,
}

impl Filters {
    /// Everything logged in `year`.
    pub fn for_year(year: i32) -> Self {
        Self {
            account: AccountFilter::All,
            category: CategoryFilter::All,
            date: DateFilter::year(year),
        }
    }

    pub fn from_selectors(
        account: &str,
        category: &str,
        month: i32,
        year: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account: AccountFilter::parse(account)?,
            category: CategoryFilter::parse(category),
            date: DateFilter::from_selector(month, year)?,
        })
    }
}

use std::env;
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};

use crate::date_utils::parse_iso_date;
use crate::error::{AppError, AppResult};
use crate::models::{DateFormat, Filters, Settings};
use crate::services::validation::{is_valid_currency_code, ValidationError};

#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_path: PathBuf,
    /// Reference date for every projection and rollup in one run.
    pub today: NaiveDate,
    pub filters: Filters,
    pub settings: Settings,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let today = match lookup("TALLY_TODAY") {
            Some(value) => parse_iso_date(value.trim()).ok_or_else(|| {
                AppError::Config(format!("TALLY_TODAY must be YYYY-MM-DD, got {value:?}"))
            })?,
            None => Local::now().date_naive(),
        };

        let month: i32 = parse_number(&lookup, "TALLY_MONTH")?.unwrap_or(-1);
        let year: i32 = parse_number(&lookup, "TALLY_YEAR")?.unwrap_or(today.year());
        let account = lookup("TALLY_ACCOUNT").unwrap_or_else(|| "All".into());
        let category = lookup("TALLY_CATEGORY").unwrap_or_else(|| "All".into());
        let filters = Filters::from_selectors(&account, &category, month, year)
            .map_err(|e| AppError::Config(format!("invalid filter selection: {e}")))?;

        let mut settings = Settings::default();
        if let Some(currency) = lookup("TALLY_CURRENCY") {
            if !is_valid_currency_code(&currency) {
                return Err(AppError::Config(format!(
                    "TALLY_CURRENCY {currency:?}: {}",
                    ValidationError::InvalidCurrencyCode
                )));
            }
            settings.currency = currency.to_uppercase();
        }
        if let Some(pattern) = lookup("TALLY_DATE_FORMAT") {
            settings.date_format = DateFormat::parse(&pattern).ok_or_else(|| {
                AppError::Config(format!("unsupported TALLY_DATE_FORMAT {pattern:?}"))
            })?;
        }

        Ok(Self {
            snapshot_path: lookup("TALLY_SNAPSHOT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/tally.json")),
            today,
            filters,
            settings,
        })
    }
}

fn parse_number<F>(lookup: &F, key: &str) -> AppResult<Option<i32>>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("{key} must be a number, got {value:?}")))
        })
        .transpose()
}

//! Plain-text formatting for amounts and dates.

use chrono::NaiveDate;

use crate::models::{DateFormat, Settings};

/// Cents as a plain decimal, e.g. `-99.99`. Used for exports and inputs.
pub fn format_cents(cents: i64) -> String {
    let abs_cents = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Amount followed by the currency code, e.g. `-99.99 NOK`.
pub fn format_amount(cents: i64, currency: &str) -> String {
    format!("{} {}", format_cents(cents), currency.to_uppercase())
}

pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.chrono_format()).to_string()
}

impl Settings {
    pub fn format_amount(&self, cents: i64) -> String {
        format_amount(cents, &self.currency)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        format_date(date, self.date_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(-9999), "-99.99");
        assert_eq!(format_cents(420042), "4200.42");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(-5), "-0.05");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(i64::MIN), "-92233720368547758.08");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(-8900, "nok"), "-89.00 NOK");
    }

    #[test]
    fn test_format_date_patterns() {
        let d = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();
        assert_eq!(format_date(d, DateFormat::DayMonthYearDot), "01.07.2020");
        assert_eq!(format_date(d, DateFormat::MonthDayYearSlash), "07/01/2020");
        assert_eq!(format_date(d, DateFormat::YearMonthDayDash), "2020-07-01");
    }

    #[test]
    fn test_settings_helpers() {
        let settings = Settings::default();
        let d = NaiveDate::from_ymd_opt(2020, 7, 11).unwrap();
        assert_eq!(settings.format_date(d), "11.07.2020");
        assert_eq!(settings.format_amount(150), "1.50 NOK");
    }
}

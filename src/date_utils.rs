use chrono::{Datelike, Months, NaiveDate};

use crate::models::BillingCycle;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const SHORT_MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Project the next occurrence of a recurring bill relative to `today`.
///
/// The billing day of `first_billing_date` is moved into today's year (and,
/// for monthly cycles, today's month). A projection that lands strictly before
/// `today` is pushed forward by one cycle. Days that do not exist in the
/// target month clamp to its last day, so a bill on the 31st falls on the
/// 30th in April and on the 28th or 29th in February.
///
/// Callers computing a whole collection should pass the same `today` to every
/// call so the batch is consistent.
pub fn next_billing_date(
    first_billing_date: NaiveDate,
    cycle: BillingCycle,
    today: NaiveDate,
) -> NaiveDate {
    let day = first_billing_date.day();

    match cycle {
        BillingCycle::Monthly => {
            let projected = clamped_date(today.year(), today.month(), day);
            if projected < today {
                let next_month = month_start(today)
                    .checked_add_months(Months::new(1))
                    .unwrap_or(NaiveDate::MAX);
                clamped_date(next_month.year(), next_month.month(), day)
            } else {
                projected
            }
        }
        BillingCycle::Yearly => {
            let month = first_billing_date.month();
            let projected = clamped_date(today.year(), month, day);
            if projected < today {
                clamped_date(today.year() + 1, month, day)
            } else {
                projected
            }
        }
    }
}

/// Build a date, clamping `day` to the length of the month.
pub fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.max(1).min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

/// Length of the month, taken from the day before the next month's first.
/// Invalid months have zero days.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Whole months left in the year after the month containing `today`.
pub fn months_after(today: NaiveDate) -> i64 {
    12 - today.month() as i64
}

/// Three-letter English month name for a 1-based month.
pub fn short_month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| SHORT_MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_monthly_upcoming_this_month() {
        let next = next_billing_date(date("2020-01-05"), BillingCycle::Monthly, date("2021-06-03"));
        assert_eq!(next, date("2021-06-05"));
    }

    #[test]
    fn test_monthly_already_billed_moves_to_next_month() {
        let next = next_billing_date(date("2020-01-05"), BillingCycle::Monthly, date("2021-06-10"));
        assert_eq!(next, date("2021-07-05"));
    }

    #[test]
    fn test_monthly_billed_today_stays_today() {
        let next = next_billing_date(date("2019-03-15"), BillingCycle::Monthly, date("2021-06-15"));
        assert_eq!(next, date("2021-06-15"));
    }

    #[test]
    fn test_monthly_december_rolls_into_next_year() {
        let next = next_billing_date(date("2020-01-05"), BillingCycle::Monthly, date("2021-12-20"));
        assert_eq!(next, date("2022-01-05"));
    }

    #[test]
    fn test_monthly_clamps_to_short_month() {
        let next = next_billing_date(date("2020-01-31"), BillingCycle::Monthly, date("2021-02-10"));
        assert_eq!(next, date("2021-02-28"));

        let next = next_billing_date(date("2020-01-31"), BillingCycle::Monthly, date("2024-02-10"));
        assert_eq!(next, date("2024-02-29"));

        let next = next_billing_date(date("2020-01-31"), BillingCycle::Monthly, date("2021-04-30"));
        assert_eq!(next, date("2021-04-30"));
    }

    #[test]
    fn test_monthly_never_before_today() {
        let today = date("2021-03-17");
        for day in 1..=31 {
            let first = clamped_date(2020, 1, day);
            let next = next_billing_date(first, BillingCycle::Monthly, today);
            assert!(next >= today);
            if first.day() < today.day() {
                assert_eq!(next.month(), 4);
            } else {
                assert_eq!(next.month(), 3);
            }
        }
    }

    #[test]
    fn test_yearly_upcoming_this_year() {
        let next = next_billing_date(date("2018-09-01"), BillingCycle::Yearly, date("2021-06-10"));
        assert_eq!(next, date("2021-09-01"));
    }

    #[test]
    fn test_yearly_passed_moves_to_next_year() {
        let next = next_billing_date(date("2018-02-01"), BillingCycle::Yearly, date("2021-06-10"));
        assert_eq!(next, date("2022-02-01"));
    }

    #[test]
    fn test_yearly_leap_day() {
        let next = next_billing_date(date("2020-02-29"), BillingCycle::Yearly, date("2021-01-10"));
        assert_eq!(next, date("2021-02-28"));

        let next = next_billing_date(date("2020-02-29"), BillingCycle::Yearly, date("2023-03-01"));
        assert_eq!(next, date("2024-02-29"));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2021, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2021, 11), 30);
        assert_eq!(days_in_month(2021, 12), 31);
        assert_eq!(days_in_month(2021, 13), 0);
        assert_eq!(clamped_date(2021, 13, 5), NaiveDate::MAX);
    }

    #[test]
    fn test_months_after() {
        assert_eq!(months_after(date("2021-01-15")), 11);
        assert_eq!(months_after(date("2021-12-15")), 0);
    }

    #[test]
    fn test_short_month_name() {
        assert_eq!(short_month_name(1), "Jan");
        assert_eq!(short_month_name(12), "Dec");
        assert_eq!(short_month_name(0), "");
        assert_eq!(short_month_name(13), "");
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date(" 2020-07-11 "), Some(date("2020-07-11")));
        assert_eq!(parse_iso_date("2020-13-01"), None);
        assert_eq!(parse_iso_date("11.07.2020"), None);
    }
}

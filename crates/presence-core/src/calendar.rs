//! Calendar arithmetic over the proleptic Gregorian calendar.
//!
//! All weekday math goes through `chrono::NaiveDate`, which carries no
//! timezone, so results never depend on the host's local clock.

use crate::{DayOfMonth, YearMonth};
use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true for Gregorian leap years.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month.
#[must_use]
pub fn days_in_month(period: YearMonth) -> u32 {
    match period.month_number() {
        2 if is_leap_year(period.year()) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Returns the weekday of a day in the given month, or `None` if the day
/// does not exist in that month.
#[must_use]
pub fn weekday_of(period: YearMonth, day: DayOfMonth) -> Option<Weekday> {
    NaiveDate::from_ymd_opt(period.year(), period.month_number(), day.get()).map(|d| d.weekday())
}

/// Returns every Saturday of the month, in ascending order.
#[must_use]
pub fn saturdays_of(period: YearMonth) -> Vec<DayOfMonth> {
    (1..=days_in_month(period))
        .filter_map(|d| DayOfMonth::new(d).ok())
        .filter(|&day| weekday_of(period, day) == Some(Weekday::Sat))
        .collect()
}

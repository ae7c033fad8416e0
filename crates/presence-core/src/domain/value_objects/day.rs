//! Day-of-month and calendar date value objects.

use super::YearMonth;
use crate::{PresenceError, PresenceResult};
use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A day of the month, `1..=31`, rendered as a two-digit string (`"01"`..`"31"`).
///
/// Whether the day exists in a particular month is checked by
/// [`PresenceDate::new`] and by the record that stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    /// Creates a day from its number.
    pub fn new(day: u32) -> PresenceResult<Self> {
        match u8::try_from(day) {
            Ok(d) if (1..=31).contains(&d) => Ok(Self(d)),
            _ => Err(PresenceError::validation(format!(
                "day must be in 1..=31, got {}",
                day
            ))),
        }
    }

    /// Returns the day number.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0 as u32
    }
}

impl FromStr for DayOfMonth {
    type Err = PresenceError;

    /// Parses a strictly two-digit day string such as `"03"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PresenceError::validation(format!(
                "day must be two digits, got '{}'",
                s
            )));
        }
        let day: u32 = s
            .parse()
            .map_err(|_| PresenceError::validation(format!("invalid day '{}'", s)))?;
        Self::new(day)
    }
}

impl Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl Serialize for DayOfMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayOfMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A calendar date that is known to exist, split into month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresenceDate {
    period: YearMonth,
    day: DayOfMonth,
}

impl PresenceDate {
    /// Creates a date, rejecting days past the end of the month.
    pub fn new(period: YearMonth, day: DayOfMonth) -> PresenceResult<Self> {
        let last = period.days_in_month();
        if day.get() > last {
            return Err(PresenceError::validation(format!(
                "day {} does not exist in {} ({} days)",
                day, period, last
            )));
        }
        Ok(Self { period, day })
    }

    /// Creates a date from a year, a 0-based month index and a day number.
    pub fn from_parts(year: i32, month: u32, day: u32) -> PresenceResult<Self> {
        Self::new(YearMonth::new(year, month)?, DayOfMonth::new(day)?)
    }

    /// Parses a `YYYY-MM-DD` string (1-based month).
    pub fn parse(input: &str) -> PresenceResult<Self> {
        let bytes = input.as_bytes();
        let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
        if bytes.len() != 10
            || bytes[4] != b'-'
            || bytes[7] != b'-'
            || !digits(0..4)
            || !digits(5..7)
            || !digits(8..10)
        {
            return Err(PresenceError::validation(format!(
                "date must be formatted YYYY-MM-DD, got '{}'",
                input
            )));
        }
        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
            PresenceError::validation(format!("invalid date '{}': {}", input, e))
        })?;
        let period = YearMonth::new(date.year(), date.month0())?;
        Self::new(period, DayOfMonth::new(date.day())?)
    }

    /// Returns the month this date belongs to.
    #[must_use]
    pub const fn period(&self) -> YearMonth {
        self.period
    }

    /// Returns the day within the month.
    #[must_use]
    pub const fn day(&self) -> DayOfMonth {
        self.day
    }
}

impl Display for PresenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.period, self.day)
    }
}

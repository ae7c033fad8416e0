//! Calendar month value object.

use crate::{calendar, PresenceError, PresenceResult, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Earliest accepted year (four digits).
pub const MIN_YEAR: i32 = 1000;

/// Latest accepted year (four digits).
pub const MAX_YEAR: i32 = 9999;

/// A validated (year, month) pair.
///
/// `month` is 0-based internally (0 = January ... 11 = December). The
/// 1-based form only exists at the outer boundary, through
/// [`YearMonth::from_one_based`] and [`YearMonth::month_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a month from a four-digit year and a 0-based month index.
    pub fn new(year: i32, month: u32) -> PresenceResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PresenceError::validation(format!(
                "year must have four digits, got {}",
                year
            )));
        }
        if month > 11 {
            return Err(PresenceError::validation(format!(
                "month index must be in 0..=11, got {}",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Creates a month from a four-digit year and a 1-based month number.
    pub fn from_one_based(year: i32, month_number: u32) -> PresenceResult<Self> {
        if !(1..=12).contains(&month_number) {
            return Err(PresenceError::validation(format!(
                "month number must be in 1..=12, got {}",
                month_number
            )));
        }
        Self::new(year, month_number - 1)
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the 0-based month index.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Returns the 1-based month number.
    #[must_use]
    pub const fn month_number(&self) -> u32 {
        self.month + 1
    }

    /// Returns the number of days in this month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        calendar::days_in_month(*self)
    }

    /// Returns the deterministic storage key `{userId}_{year}_{MM}`.
    #[must_use]
    pub fn storage_key(&self, user_id: &UserId) -> String {
        format!("{}_{}_{:02}", user_id, self.year, self.month_number())
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month_number())
    }
}

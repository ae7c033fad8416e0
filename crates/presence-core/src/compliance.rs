//! Monthly compliance calculation.
//!
//! A user is compliant for a month when any one of three alternative
//! attendance rules holds:
//!
//! | Rule | Condition |
//! |------|-----------|
//! | all Saturdays | every Saturday of the month is present (vacuously true with none) |
//! | 8 and 2 | at least 8 present days, at least 2 of them Saturdays |
//! | 10 days | at least 10 present days of any weekday |
//!
//! [`compute_stats`] is the only place these rules are evaluated.

use crate::{calendar, DayOfMonth, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Minimum present days for the 8-and-2 rule.
pub const EIGHT_AND_TWO_MIN_DAYS: u32 = 8;

/// Minimum present Saturdays for the 8-and-2 rule.
pub const EIGHT_AND_TWO_MIN_SATURDAYS: u32 = 2;

/// Minimum present days for the 10-days rule.
pub const TEN_DAYS_MIN_DAYS: u32 = 10;

/// One of the alternative monthly attendance rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComplianceRule {
    AllSaturdays,
    EightDaysTwoSaturdays,
    TenDays,
}

/// Statistics derived from a month's presence entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStats {
    pub total_days: u32,
    pub present_days: u32,
    pub total_saturdays: u32,
    pub present_saturdays: u32,
    pub meets_all_saturdays: bool,
    #[serde(rename = "meets8Days2Sats")]
    pub meets_8_days_2_sats: bool,
    /// Historical name: any ten present days qualify, weekends included.
    #[serde(rename = "meets10Weekdays")]
    pub meets_10_weekdays: bool,
    pub is_compliant: bool,
}

impl ComplianceStats {
    /// Stats for a month with no presence at all.
    #[must_use]
    pub fn empty(period: YearMonth) -> Self {
        compute_stats(period, std::iter::empty())
    }

    /// Returns the rules this month satisfies.
    #[must_use]
    pub fn satisfied_rules(&self) -> Vec<ComplianceRule> {
        [
            (self.meets_all_saturdays, ComplianceRule::AllSaturdays),
            (self.meets_8_days_2_sats, ComplianceRule::EightDaysTwoSaturdays),
            (self.meets_10_weekdays, ComplianceRule::TenDays),
        ]
        .into_iter()
        .filter_map(|(met, rule)| met.then_some(rule))
        .collect()
    }
}

/// Computes the month's statistics from the set of present days.
///
/// Duplicate days are counted once. Days outside the month never match a
/// Saturday but still count toward `present_days`, so callers pass only
/// days already validated against `period`.
#[must_use]
pub fn compute_stats<I>(period: YearMonth, present: I) -> ComplianceStats
where
    I: IntoIterator<Item = DayOfMonth>,
{
    let present: BTreeSet<DayOfMonth> = present.into_iter().collect();
    let saturdays = calendar::saturdays_of(period);

    let total_days = calendar::days_in_month(period);
    let present_days = count(present.len());
    let total_saturdays = count(saturdays.len());
    let present_saturdays = count(saturdays.iter().filter(|d| present.contains(d)).count());

    let meets_all_saturdays = present_saturdays == total_saturdays;
    let meets_8_days_2_sats = present_days >= EIGHT_AND_TWO_MIN_DAYS
        && present_saturdays >= EIGHT_AND_TWO_MIN_SATURDAYS;
    let meets_10_weekdays = present_days >= TEN_DAYS_MIN_DAYS;

    ComplianceStats {
        total_days,
        present_days,
        total_saturdays,
        present_saturdays,
        meets_all_saturdays,
        meets_8_days_2_sats,
        meets_10_weekdays,
        is_compliant: meets_all_saturdays || meets_8_days_2_sats || meets_10_weekdays,
    }
}

// A month holds at most 31 days.
fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

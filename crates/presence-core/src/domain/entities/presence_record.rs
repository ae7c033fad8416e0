//! Monthly presence record entity.

use crate::compliance::{compute_stats, ComplianceStats};
use crate::{DayOfMonth, PresenceDate, PresenceError, PresenceKind, PresenceResult, UserId, YearMonth};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Present days of a month, keyed by day.
pub type PresenceEntries = BTreeMap<DayOfMonth, PresenceEntry>;

/// One marked day within a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEntry {
    pub day: DayOfMonth,
    pub kind: PresenceKind,
    pub marked_at: DateTime<Utc>,
}

/// The presence document for one user and one month.
///
/// `stats` is recomputed on every mutation and is never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPresenceRecord {
    pub user_id: UserId,

    #[serde(flatten)]
    pub period: YearMonth,

    pub entries: PresenceEntries,

    pub stats: ComplianceStats,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl MonthlyPresenceRecord {
    /// Creates a record with no entries.
    #[must_use]
    pub fn new(user_id: UserId, period: YearMonth) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            period,
            entries: PresenceEntries::new(),
            stats: ComplianceStats::empty(period),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the storage key of this record.
    #[must_use]
    pub fn storage_key(&self) -> String {
        self.period.storage_key(&self.user_id)
    }

    /// Checks whether a day is marked.
    #[must_use]
    pub fn is_marked(&self, day: DayOfMonth) -> bool {
        self.entries.contains_key(&day)
    }

    /// Checks whether any day is marked.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Marks a day present.
    ///
    /// Fails with `Conflict` if the day is already marked; the existing entry
    /// is left untouched.
    pub fn mark(&mut self, day: DayOfMonth, kind: PresenceKind) -> PresenceResult<&ComplianceStats> {
        PresenceDate::new(self.period, day)?;

        if self.is_marked(day) {
            return Err(PresenceError::conflict(format!(
                "day {} of {} already marked for user {}",
                day, self.period, self.user_id
            )));
        }

        let now = Utc::now();
        self.entries.insert(
            day,
            PresenceEntry {
                day,
                kind,
                marked_at: now,
            },
        );
        self.touch(now);
        Ok(&self.stats)
    }

    /// Removes the mark for a day.
    pub fn unmark(&mut self, day: DayOfMonth) -> PresenceResult<PresenceEntry> {
        let removed = self.entries.remove(&day).ok_or_else(|| {
            PresenceError::not_found("PresenceEntry", format!("{}/{}", self.storage_key(), day))
        })?;
        self.touch(Utc::now());
        Ok(removed)
    }

    /// Returns the marked days as full dates, ascending.
    #[must_use]
    pub fn present_dates(&self) -> Vec<PresenceDate> {
        self.entries
            .keys()
            .filter_map(|&day| PresenceDate::new(self.period, day).ok())
            .collect()
    }

    /// Recomputes `stats` from `entries`.
    pub fn recompute_stats(&mut self) {
        self.stats = compute_stats(self.period, self.entries.keys().copied());
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.recompute_stats();
        self.updated_at = now;
    }
}

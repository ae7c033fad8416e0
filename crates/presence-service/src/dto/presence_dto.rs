//! Single-user presence DTOs.
//!
//! Requests arrive with 1-based months and `YYYY-MM-DD` dates; they are
//! converted to the 0-based internal [`YearMonth`] here and nowhere else.

use chrono::{DateTime, Utc};
use presence_core::{
    ComplianceStats, MonthlyPresenceRecord, PresenceDate, PresenceEntries, PresenceKind, PresenceResult,
    UserId, ValidateExt, YearMonth,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to mark a day present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MarkDayRequest {
    #[validate(length(min = 1, max = 128, message = "userId must be 1-128 characters"))]
    pub user_id: String,

    #[validate(length(equal = 10, message = "date must be formatted YYYY-MM-DD"))]
    pub date: String,

    #[serde(default)]
    pub kind: PresenceKind,
}

impl MarkDayRequest {
    /// Validates the request and parses its date.
    pub fn into_command(self) -> PresenceResult<MarkDayCommand> {
        self.validate_request()?;
        Ok(MarkDayCommand {
            date: PresenceDate::parse(&self.date)?,
            user_id: UserId::from(self.user_id),
            kind: self.kind,
        })
    }
}

/// Validated mark-day input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkDayCommand {
    pub user_id: UserId,
    pub date: PresenceDate,
    pub kind: PresenceKind,
}

/// Request to remove a mark.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UnmarkDayRequest {
    #[validate(length(min = 1, max = 128, message = "userId must be 1-128 characters"))]
    pub user_id: String,

    #[validate(length(equal = 10, message = "date must be formatted YYYY-MM-DD"))]
    pub date: String,
}

impl UnmarkDayRequest {
    /// Validates the request and parses its date.
    pub fn into_command(self) -> PresenceResult<(UserId, PresenceDate)> {
        self.validate_request()?;
        let date = PresenceDate::parse(&self.date)?;
        Ok((UserId::from(self.user_id), date))
    }
}

/// A month addressed from outside, with a 1-based month number.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct MonthQuery {
    #[validate(range(min = 1000, max = 9999, message = "year must have four digits"))]
    pub year: i32,

    /// 1 = January ... 12 = December.
    #[validate(range(min = 1, max = 12, message = "month must be in 1..=12"))]
    pub month: u32,
}

impl MonthQuery {
    /// Converts the 1-based query into the internal 0-based month.
    pub fn period(&self) -> PresenceResult<YearMonth> {
        self.validate_request()?;
        YearMonth::from_one_based(self.year, self.month)
    }
}

/// Result of a successful mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDayResponse {
    pub user_id: UserId,
    pub date: String,
    pub kind: PresenceKind,
    pub stats: ComplianceStats,
}

/// Acknowledgement of a removed mark.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmarkDayResponse {
    pub user_id: UserId,
    pub date: String,
    pub removed_kind: PresenceKind,
    pub stats: ComplianceStats,
}

/// A user's month as seen by readers.
///
/// `exists` is false when no document is stored; `stats` is then the
/// empty-month computation, identical to a stored record with no entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthResponse {
    pub user_id: UserId,
    pub year: i32,
    /// 0-based month index.
    pub month: u32,
    pub entries: PresenceEntries,
    pub stats: ComplianceStats,
    pub present_dates: Vec<String>,
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MonthResponse {
    /// Synthesizes the view of a month with no stored document.
    #[must_use]
    pub fn absent(user_id: UserId, period: YearMonth) -> Self {
        Self::from(MonthlyPresenceRecord::new(user_id, period)).into_absent()
    }

    fn into_absent(mut self) -> Self {
        self.exists = false;
        self.updated_at = None;
        self
    }

    /// Returns the month this response describes.
    pub fn period(&self) -> PresenceResult<YearMonth> {
        YearMonth::new(self.year, self.month)
    }
}

impl From<MonthlyPresenceRecord> for MonthResponse {
    fn from(record: MonthlyPresenceRecord) -> Self {
        let present_dates = record.present_dates().iter().map(ToString::to_string).collect();
        Self {
            year: record.period.year(),
            month: record.period.month(),
            user_id: record.user_id,
            entries: record.entries,
            stats: record.stats,
            present_dates,
            exists: true,
            updated_at: Some(record.updated_at),
        }
    }
}

/// Signal that a user joined an event on a given date.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActivityJoinedEvent {
    #[validate(length(min = 1, max = 128, message = "userId must be 1-128 characters"))]
    pub user_id: String,

    #[validate(length(equal = 10, message = "eventDate must be formatted YYYY-MM-DD"))]
    pub event_date: String,
}

impl ActivityJoinedEvent {
    /// Validates the event and parses its date.
    pub fn into_command(self) -> PresenceResult<(UserId, PresenceDate)> {
        self.validate_request()?;
        let date = PresenceDate::parse(&self.event_date)?;
        Ok((UserId::from(self.user_id), date))
    }
}

//! Presence service trait definition.

use crate::dto::{MarkDayResponse, MonthResponse, UnmarkDayResponse};
use async_trait::async_trait;
use presence_core::{Interface, PresenceDate, PresenceKind, PresenceResult, UserId, YearMonth};

/// Single-user operations on the monthly presence document.
///
/// Every mutation is one read-modify-write of one document. Upstream
/// errors are propagated unchanged.
#[async_trait]
pub trait PresenceService: Interface + Send + Sync {
    /// Marks a day present, creating the month's record if needed.
    ///
    /// Fails with `Conflict` if the day is already marked.
    async fn mark_day(&self, user_id: &UserId, date: PresenceDate, kind: PresenceKind) -> PresenceResult<MarkDayResponse>;

    /// Removes the mark for a day.
    ///
    /// Fails with `NotFound` if the month has no record or the day is unmarked.
    async fn unmark_day(&self, user_id: &UserId, date: PresenceDate) -> PresenceResult<UnmarkDayResponse>;

    /// Reads a month. A month with no record yields the empty-month view.
    async fn get_month(&self, user_id: &UserId, period: YearMonth) -> PresenceResult<MonthResponse>;

    /// Lists every stored month for a user, oldest first.
    async fn list_months(&self, user_id: &UserId) -> PresenceResult<Vec<MonthResponse>>;
}

//! Repository trait definitions.

use async_trait::async_trait;
use presence_core::{Interface, MonthlyPresenceRecord, PresenceResult, UserId, YearMonth};

/// Monthly presence repository.
///
/// One document per `(user, year, month)`, always read and written whole.
#[async_trait]
pub trait MonthlyPresenceRepository: Interface + Send + Sync {
    /// Finds the record for a user and month.
    async fn find(&self, user_id: &UserId, period: YearMonth) -> PresenceResult<Option<MonthlyPresenceRecord>>;

    /// Writes the whole record under its storage key.
    async fn save(&self, record: &MonthlyPresenceRecord) -> PresenceResult<()>;

    /// Finds every stored month for a user, oldest first.
    async fn find_all_for_user(&self, user_id: &UserId) -> PresenceResult<Vec<MonthlyPresenceRecord>>;
}

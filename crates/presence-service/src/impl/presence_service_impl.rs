//! Presence service implementation.

use crate::dto::{MarkDayResponse, MonthResponse, UnmarkDayResponse};
use crate::presence_service::PresenceService;
use async_trait::async_trait;
use presence_core::{
    MonthlyPresenceRecord, PresenceDate, PresenceError, PresenceKind, PresenceResult, UserId, YearMonth,
};
use presence_repository::MonthlyPresenceRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Presence service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = PresenceService)]
pub struct PresenceServiceImpl {
    #[shaku(inject)]
    repository: Arc<dyn MonthlyPresenceRepository>,
}

impl PresenceServiceImpl {
    /// Creates a service over the given repository.
    #[must_use]
    pub fn new(repository: Arc<dyn MonthlyPresenceRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PresenceService for PresenceServiceImpl {
    async fn mark_day(&self, user_id: &UserId, date: PresenceDate, kind: PresenceKind) -> PresenceResult<MarkDayResponse> {
        debug!("Marking {} present on {} ({})", user_id, date, kind.as_str());

        let period = date.period();
        let mut record = self
            .repository
            .find(user_id, period)
            .await?
            .unwrap_or_else(|| MonthlyPresenceRecord::new(user_id.clone(), period));

        let stats = *record.mark(date.day(), kind)?;
        self.repository.save(&record).await?;

        info!("Marked {} present on {} ({} days this month)", user_id, date, stats.present_days);
        Ok(MarkDayResponse {
            user_id: user_id.clone(),
            date: date.to_string(),
            kind,
            stats,
        })
    }

    async fn unmark_day(&self, user_id: &UserId, date: PresenceDate) -> PresenceResult<UnmarkDayResponse> {
        debug!("Unmarking {} on {}", user_id, date);

        let period = date.period();
        let mut record = self
            .repository
            .find(user_id, period)
            .await?
            .ok_or_else(|| PresenceError::not_found("MonthlyPresence", period.storage_key(user_id)))?;

        let removed = record.unmark(date.day())?;
        self.repository.save(&record).await?;

        info!("Unmarked {} on {}", user_id, date);
        Ok(UnmarkDayResponse {
            user_id: user_id.clone(),
            date: date.to_string(),
            removed_kind: removed.kind,
            stats: record.stats,
        })
    }

    async fn get_month(&self, user_id: &UserId, period: YearMonth) -> PresenceResult<MonthResponse> {
        debug!("Getting month {} for {}", period, user_id);

        Ok(match self.repository.find(user_id, period).await? {
            Some(record) => MonthResponse::from(record),
            None => MonthResponse::absent(user_id.clone(), period),
        })
    }

    async fn list_months(&self, user_id: &UserId) -> PresenceResult<Vec<MonthResponse>> {
        debug!("Listing months for {}", user_id);

        let records = self.repository.find_all_for_user(user_id).await?;
        Ok(records.into_iter().map(MonthResponse::from).collect())
    }
}

impl std::fmt::Debug for PresenceServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use presence_repository::{InMemoryDocumentStore, MonthlyPresenceRepositoryImpl, DEFAULT_COLLECTION};

    mock! {
        pub Repository {}

        #[async_trait]
        impl MonthlyPresenceRepository for Repository {
            async fn find(&self, user_id: &UserId, period: YearMonth) -> PresenceResult<Option<MonthlyPresenceRecord>>;
            async fn save(&self, record: &MonthlyPresenceRecord) -> PresenceResult<()>;
            async fn find_all_for_user(&self, user_id: &UserId) -> PresenceResult<Vec<MonthlyPresenceRecord>>;
        }
    }

    fn in_memory_service() -> PresenceServiceImpl {
        let store = Arc::new(InMemoryDocumentStore::new());
        PresenceServiceImpl::new(Arc::new(MonthlyPresenceRepositoryImpl::new(store, DEFAULT_COLLECTION)))
    }

    fn date(s: &str) -> PresenceDate {
        PresenceDate::parse(s).unwrap()
    }

    fn feb() -> YearMonth {
        YearMonth::new(2024, 1).unwrap()
    }

    #[tokio::test]
    async fn test_mark_creates_record() {
        let service = in_memory_service();
        let alice = UserId::new("alice");

        let response = service
            .mark_day(&alice, date("2024-02-03"), PresenceKind::Manual)
            .await
            .unwrap();
        assert_eq!(response.date, "2024-02-03");
        assert_eq!(response.stats.present_days, 1);
        assert_eq!(response.stats.present_saturdays, 1);

        let month = service.get_month(&alice, feb()).await.unwrap();
        assert!(month.exists);
        assert_eq!(month.present_dates, vec!["2024-02-03"]);
    }

    #[tokio::test]
    async fn test_mark_twice_conflicts() {
        let service = in_memory_service();
        let alice = UserId::new("alice");
        service
            .mark_day(&alice, date("2024-02-05"), PresenceKind::Manual)
            .await
            .unwrap();

        let err = service
            .mark_day(&alice, date("2024-02-05"), PresenceKind::Activity)
            .await
            .unwrap_err();
        assert!(err.is_conflict());

        let month = service.get_month(&alice, feb()).await.unwrap();
        let entry = month.entries.values().next().unwrap();
        assert_eq!(entry.kind, PresenceKind::Manual);
    }

    #[tokio::test]
    async fn test_unmark_round_trip() {
        let service = in_memory_service();
        let alice = UserId::new("alice");
        let before = service.get_month(&alice, feb()).await.unwrap().stats;

        service
            .mark_day(&alice, date("2024-02-10"), PresenceKind::Manual)
            .await
            .unwrap();
        let response = service.unmark_day(&alice, date("2024-02-10")).await.unwrap();

        assert_eq!(response.removed_kind, PresenceKind::Manual);
        assert_eq!(response.stats, before);
        let month = service.get_month(&alice, feb()).await.unwrap();
        assert!(month.exists);
        assert!(month.present_dates.is_empty());
    }

    #[tokio::test]
    async fn test_unmark_without_record_is_not_found() {
        let service = in_memory_service();
        let err = service
            .unmark_day(&UserId::new("alice"), date("2024-02-10"))
            .await
            .unwrap_err();
        assert!(matches!(err, PresenceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_month_absent() {
        let service = in_memory_service();
        let month = service.get_month(&UserId::new("nobody"), feb()).await.unwrap();
        assert!(!month.exists);
        assert_eq!(month.stats.total_days, 29);
        assert_eq!(month.stats.total_saturdays, 4);
        assert!(!month.stats.is_compliant);
    }

    #[tokio::test]
    async fn test_list_months() {
        let service = in_memory_service();
        let alice = UserId::new("alice");
        service
            .mark_day(&alice, date("2024-03-01"), PresenceKind::Manual)
            .await
            .unwrap();
        service
            .mark_day(&alice, date("2024-01-15"), PresenceKind::Manual)
            .await
            .unwrap();

        let months = service.list_months(&alice).await.unwrap();
        let periods: Vec<u32> = months.iter().map(|m| m.month).collect();
        assert_eq!(periods, vec![0, 2]);
    }

    #[tokio::test]
    async fn test_mark_does_one_read_and_one_write() {
        let mut repo = MockRepository::new();
        repo.expect_find().times(1).returning(|_, _| Ok(None));
        repo.expect_save()
            .times(1)
            .withf(|record| record.storage_key() == "alice_2024_02" && record.entries.len() == 1)
            .returning(|_| Ok(()));

        let service = PresenceServiceImpl::new(Arc::new(repo));
        service
            .mark_day(&UserId::new("alice"), date("2024-02-03"), PresenceKind::Manual)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_store_failure_propagates_unchanged() {
        let mut repo = MockRepository::new();
        repo.expect_find()
            .returning(|_, _| Err(PresenceError::upstream("document-store", "connection reset")));
        repo.expect_save().never();

        let service = PresenceServiceImpl::new(Arc::new(repo));
        let err = service
            .mark_day(&UserId::new("alice"), date("2024-02-03"), PresenceKind::Manual)
            .await
            .unwrap_err();
        assert!(err.is_upstream());
        assert!(err.to_string().contains("connection reset"));

        let err = service.get_month(&UserId::new("alice"), feb()).await.unwrap_err();
        assert!(err.is_upstream());
    }

    #[tokio::test]
    async fn test_failed_save_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_find().returning(|_, _| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(PresenceError::upstream("document-store", "write rejected")));

        let service = PresenceServiceImpl::new(Arc::new(repo));
        let err = service
            .mark_day(&UserId::new("alice"), date("2024-02-03"), PresenceKind::Manual)
            .await
            .unwrap_err();
        assert!(err.is_upstream());
    }
}

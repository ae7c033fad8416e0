//! Overview service implementation.
//!
//! Fans out one `get_month` per roster member on its own task. A semaphore
//! bounds how many fetches run at once; each fetch carries its own deadline.
//! Results are collected by position, so rows keep roster order no matter
//! which fetch finishes first.

use crate::dto::{MonthResponse, OverviewAggregate, UserOverview};
use crate::overview_service::OverviewService;
use crate::presence_service::PresenceService;
use crate::roster::RosterMember;
use async_trait::async_trait;
use futures::future::join_all;
use presence_config::OverviewConfig;
use presence_core::{PresenceError, PresenceResult, YearMonth};
use presence_resilience::with_timeout;
use shaku::Component;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::{debug, info, info_span, warn, Instrument};

/// Overview service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = OverviewService)]
pub struct OverviewServiceImpl {
    #[shaku(inject)]
    presence: Arc<dyn PresenceService>,

    #[shaku(default = OverviewConfig::default())]
    config: OverviewConfig,
}

impl OverviewServiceImpl {
    /// Creates an overview service over the given presence service.
    #[must_use]
    pub fn new(presence: Arc<dyn PresenceService>, config: OverviewConfig) -> Self {
        Self { presence, config }
    }

    /// Returns the fan-out settings in use.
    #[must_use]
    pub const fn config(&self) -> &OverviewConfig {
        &self.config
    }

    fn row(
        member: RosterMember,
        period: YearMonth,
        joined: Result<PresenceResult<MonthResponse>, JoinError>,
    ) -> UserOverview {
        let outcome = joined
            .map_err(|e| PresenceError::internal(format!("fetch task failed: {}", e)))
            .and_then(|result| result);

        match outcome {
            Ok(month) => UserOverview::from_month(member, month),
            Err(err) => {
                warn!(user_id = %member.user_id, error = %err, "Overview fetch failed");
                UserOverview::failed(member, period, err.to_string())
            }
        }
    }
}

#[async_trait]
impl OverviewService for OverviewServiceImpl {
    async fn overview(&self, period: YearMonth, roster: Vec<RosterMember>) -> OverviewAggregate {
        let started = Instant::now();
        let permits = self.config.max_concurrency.max(1);
        let deadline = self.config.fetch_timeout();
        debug!(
            "Building overview for {}: {} members, {} concurrent, {:?} per fetch",
            period,
            roster.len(),
            permits,
            deadline
        );

        let semaphore = Arc::new(Semaphore::new(permits));
        let handles: Vec<_> = roster
            .iter()
            .map(|member| {
                let presence = Arc::clone(&self.presence);
                let semaphore = Arc::clone(&semaphore);
                let user_id = member.user_id.clone();
                let span = info_span!("overview_fetch", user_id = %user_id);

                tokio::spawn(
                    async move {
                        let _permit = semaphore
                            .acquire_owned()
                            .await
                            .map_err(|e| PresenceError::internal(e.to_string()))?;
                        with_timeout(deadline, || presence.get_month(&user_id, period)).await
                    }
                    .instrument(span),
                )
            })
            .collect();

        let results = join_all(handles).await;
        let per_user: Vec<UserOverview> = roster
            .into_iter()
            .zip(results)
            .map(|(member, joined)| Self::row(member, period, joined))
            .collect();

        let aggregate = OverviewAggregate::new(period, per_user);
        info!(
            "Overview for {} built in {:?}: {} users, {} with data, {} failed",
            period,
            started.elapsed(),
            aggregate.summary.total_users,
            aggregate.summary.users_with_data,
            aggregate.summary.users_with_errors
        );
        aggregate
    }
}

impl std::fmt::Debug for OverviewServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverviewServiceImpl")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

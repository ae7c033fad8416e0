//! Overview service trait definition.

use crate::dto::OverviewAggregate;
use crate::roster::{RosterMember, RosterProvider};
use async_trait::async_trait;
use presence_core::{Interface, PresenceError, PresenceResult, YearMonth};

/// Roster-wide monthly snapshot.
#[async_trait]
pub trait OverviewService: Interface + Send + Sync {
    /// Aggregates one month over `roster`.
    ///
    /// Never fails: a member whose fetch errors or times out gets a flagged
    /// zero-stats row. Rows keep roster order.
    async fn overview(&self, period: YearMonth, roster: Vec<RosterMember>) -> OverviewAggregate;

    /// Fetches the roster from `provider`, then aggregates.
    ///
    /// Without a roster there is nothing to fan out over, so a provider
    /// failure fails the whole call as `Upstream`.
    async fn overview_from_provider(
        &self,
        period: YearMonth,
        provider: &dyn RosterProvider,
    ) -> PresenceResult<OverviewAggregate> {
        let roster = provider.list_members().await.map_err(|e| {
            if e.is_upstream() {
                e
            } else {
                PresenceError::upstream("roster-provider", e.to_string())
            }
        })?;
        Ok(self.overview(period, roster).await)
    }
}

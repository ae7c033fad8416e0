//! Activity bridge implementation.

use crate::activity_bridge::{ActivityMarkOutcome, ActivityPresenceBridge};
use crate::presence_service::PresenceService;
use async_trait::async_trait;
use presence_core::{PresenceDate, PresenceKind, PresenceResult, UserId};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Activity bridge component for Shaku DI.
#[derive(Component)]
#[shaku(interface = ActivityPresenceBridge)]
pub struct ActivityPresenceBridgeImpl {
    #[shaku(inject)]
    presence: Arc<dyn PresenceService>,
}

impl ActivityPresenceBridgeImpl {
    /// Creates a bridge that marks through the given presence service.
    #[must_use]
    pub fn new(presence: Arc<dyn PresenceService>) -> Self {
        Self { presence }
    }
}

#[async_trait]
impl ActivityPresenceBridge for ActivityPresenceBridgeImpl {
    async fn mark_from_activity(&self, user_id: &UserId, date: PresenceDate) -> PresenceResult<ActivityMarkOutcome> {
        match self.presence.mark_day(user_id, date, PresenceKind::Activity).await {
            Ok(response) => {
                info!("Activity marked {} present on {}", user_id, date);
                Ok(ActivityMarkOutcome::Marked { stats: response.stats })
            }
            Err(err) if err.is_conflict() => {
                debug!("{} already present on {}, activity ignored", user_id, date);
                Ok(ActivityMarkOutcome::AlreadyPresent)
            }
            Err(err) => Err(err),
        }
    }
}

impl std::fmt::Debug for ActivityPresenceBridgeImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityPresenceBridgeImpl").finish_non_exhaustive()
    }
}

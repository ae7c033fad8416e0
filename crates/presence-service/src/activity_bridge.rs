//! Activity-to-presence bridge trait definition.

use async_trait::async_trait;
use presence_core::{ComplianceStats, Interface, PresenceDate, PresenceResult, UserId};
use serde::{Deserialize, Serialize};

/// Outcome of marking presence from an activity signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ActivityMarkOutcome {
    /// The day was newly marked with kind `activity`.
    Marked { stats: ComplianceStats },
    /// The day was already present; nothing changed.
    AlreadyPresent,
}

impl ActivityMarkOutcome {
    /// Returns true if this call created the entry.
    #[must_use]
    pub const fn is_newly_marked(&self) -> bool {
        matches!(self, Self::Marked { .. })
    }
}

/// Marks presence when a user joins a dated event.
#[async_trait]
pub trait ActivityPresenceBridge: Interface + Send + Sync {
    /// Marks `date` with kind `activity`; an existing mark is a no-op.
    async fn mark_from_activity(&self, user_id: &UserId, date: PresenceDate) -> PresenceResult<ActivityMarkOutcome>;
}

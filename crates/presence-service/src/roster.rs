//! Roster source abstraction.
//!
//! The engine does not own the list of users. An external directory
//! implements [`RosterProvider`]; the overview only reads from it.

use async_trait::async_trait;
use presence_core::{Interface, PresenceResult, UserId};
use serde::{Deserialize, Serialize};

/// A user as listed by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterMember {
    pub user_id: UserId,
    pub display_name: String,
}

impl RosterMember {
    /// Creates a roster member.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Supplies the authoritative roster.
#[async_trait]
pub trait RosterProvider: Interface + Send + Sync {
    /// Lists every member, in the order the overview should report them.
    async fn list_members(&self) -> PresenceResult<Vec<RosterMember>>;
}

/// Fixed roster, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRosterProvider {
    members: Vec<RosterMember>,
}

impl StaticRosterProvider {
    /// Creates a provider that always returns `members`.
    #[must_use]
    pub fn new(members: Vec<RosterMember>) -> Self {
        Self { members }
    }
}

#[async_trait]
impl RosterProvider for StaticRosterProvider {
    async fn list_members(&self) -> PresenceResult<Vec<RosterMember>> {
        Ok(self.members.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_preserves_order() {
        let provider = StaticRosterProvider::new(vec![
            RosterMember::new("b", "Bea"),
            RosterMember::new("a", "Ann"),
        ]);
        let members = provider.list_members().await.unwrap();
        assert_eq!(members[0].user_id.as_str(), "b");
        assert_eq!(members[1].display_name, "Ann");
    }
}

//! Shared fixtures for presence service integration tests.

use async_trait::async_trait;
use presence_config::OverviewConfig;
use presence_core::{PresenceError, PresenceResult};
use presence_repository::{DocumentStore, InMemoryDocumentStore, MonthlyPresenceRepositoryImpl, DEFAULT_COLLECTION};
use presence_service::{ActivityPresenceBridgeImpl, OverviewServiceImpl, PresenceServiceImpl};
use std::collections::HashSet;
use std::sync::Arc;

/// In-memory store that fails reads for chosen users.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: InMemoryDocumentStore,
    unreachable_users: HashSet<String>,
}

impl FlakyStore {
    pub fn failing_for(users: &[&str]) -> Self {
        Self {
            inner: InMemoryDocumentStore::new(),
            unreachable_users: users.iter().map(|u| format!("{}_", u)).collect(),
        }
    }

    fn check(&self, key: &str) -> PresenceResult<()> {
        if self.unreachable_users.iter().any(|prefix| key.starts_with(prefix.as_str())) {
            return Err(PresenceError::upstream("document-store", format!("shard for '{}' unreachable", key)));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FlakyStore {
    async fn get(&self, collection: &str, key: &str) -> PresenceResult<Option<String>> {
        self.check(key)?;
        self.inner.get(collection, key).await
    }

    async fn set(&self, collection: &str, key: &str, document: String) -> PresenceResult<()> {
        self.inner.set(collection, key, document).await
    }

    async fn delete(&self, collection: &str, key: &str) -> PresenceResult<bool> {
        self.inner.delete(collection, key).await
    }

    async fn scan_prefix(&self, collection: &str, prefix: &str) -> PresenceResult<Vec<(String, String)>> {
        self.check(prefix)?;
        self.inner.scan_prefix(collection, prefix).await
    }
}

/// Services wired by hand over one store.
pub struct Engine {
    pub presence: Arc<PresenceServiceImpl>,
    pub overview: OverviewServiceImpl,
    pub bridge: ActivityPresenceBridgeImpl,
}

impl Engine {
    pub fn over(store: Arc<dyn DocumentStore>) -> Self {
        let repository = Arc::new(MonthlyPresenceRepositoryImpl::new(store, DEFAULT_COLLECTION));
        let presence = Arc::new(PresenceServiceImpl::new(repository));
        Self {
            overview: OverviewServiceImpl::new(presence.clone(), OverviewConfig::default()),
            bridge: ActivityPresenceBridgeImpl::new(presence.clone()),
            presence,
        }
    }

    pub fn in_memory() -> Self {
        Self::over(Arc::new(InMemoryDocumentStore::new()))
    }
}

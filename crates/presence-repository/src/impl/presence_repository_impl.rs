//! `MonthlyPresenceRepositoryImpl` — Repository layer implementation.
//!
//! Maps [`MonthlyPresenceRecord`]s to JSON documents in a
//! [`DocumentStore`] collection:
//!
//! ```text
//! Service
//!   ↓ Arc<dyn MonthlyPresenceRepository>
//! MonthlyPresenceRepositoryImpl   ← key derivation, (de)serialization, stats refresh
//!   ↓ Arc<dyn DocumentStore>
//! InMemoryDocumentStore / networked store
//! ```
//!
//! [`DocumentStore`]: crate::dao::DocumentStore

use crate::{dao::DocumentStore, traits::MonthlyPresenceRepository};
use async_trait::async_trait;
use presence_core::{MonthlyPresenceRecord, PresenceError, PresenceResult, UserId, YearMonth};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Collection used when none is configured.
pub const DEFAULT_COLLECTION: &str = "monthlyPresence";

/// Repository implementation over a [`DocumentStore`].
///
/// [`DocumentStore`]: crate::dao::DocumentStore
#[derive(Component)]
#[shaku(interface = MonthlyPresenceRepository)]
pub struct MonthlyPresenceRepositoryImpl {
    #[shaku(inject)]
    store: Arc<dyn DocumentStore>,

    #[shaku(default = DEFAULT_COLLECTION.to_string())]
    collection: String,
}

impl MonthlyPresenceRepositoryImpl {
    /// Creates a repository over the given store and collection.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Returns the collection this repository writes to.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Decodes a stored document and refreshes its derived stats.
    fn decode(key: &str, document: &str) -> PresenceResult<MonthlyPresenceRecord> {
        let mut record: MonthlyPresenceRecord = serde_json::from_str(document)?;
        if record.storage_key() != key {
            return Err(PresenceError::upstream(
                "document-store",
                format!("document under '{}' belongs to '{}'", key, record.storage_key()),
            ));
        }
        record.recompute_stats();
        Ok(record)
    }
}

#[async_trait]
impl MonthlyPresenceRepository for MonthlyPresenceRepositoryImpl {
    async fn find(&self, user_id: &UserId, period: YearMonth) -> PresenceResult<Option<MonthlyPresenceRecord>> {
        let key = period.storage_key(user_id);
        debug!("Repository: find {}", key);

        self.store
            .get(&self.collection, &key)
            .await?
            .map(|document| Self::decode(&key, &document))
            .transpose()
    }

    async fn save(&self, record: &MonthlyPresenceRecord) -> PresenceResult<()> {
        let key = record.storage_key();
        debug!("Repository: save {} ({} entries)", key, record.entries.len());

        let document = serde_json::to_string(record)?;
        self.store.set(&self.collection, &key, document).await
    }

    async fn find_all_for_user(&self, user_id: &UserId) -> PresenceResult<Vec<MonthlyPresenceRecord>> {
        debug!("Repository: find_all_for_user {}", user_id);

        let prefix = format!("{}_", user_id);
        let mut records = Vec::new();
        for (key, document) in self.store.scan_prefix(&self.collection, &prefix).await? {
            let record = Self::decode(&key, &document)?;
            // Keys of users whose id extends this one share the prefix.
            if &record.user_id == user_id {
                records.push(record);
            }
        }
        records.sort_by_key(|r| r.period);
        Ok(records)
    }
}

impl std::fmt::Debug for MonthlyPresenceRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonthlyPresenceRepositoryImpl")
            .field("collection", &self.collection)
            .finish_non_exhaustive()
    }
}

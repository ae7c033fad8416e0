//! In-process document store.

use crate::dao::DocumentStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use presence_core::PresenceResult;
use shaku::Component;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

type Collection = BTreeMap<String, String>;

/// `DocumentStore` backed by a map per collection.
///
/// Used for embedding and tests. Writes are last-writer-wins.
#[derive(Component, Default)]
#[shaku(interface = DocumentStore)]
pub struct InMemoryDocumentStore {
    #[shaku(default)]
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents in a collection.
    #[must_use]
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, BTreeMap::len)
    }

    /// Returns true if the collection holds no documents.
    #[must_use]
    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, key: &str) -> PresenceResult<Option<String>> {
        debug!("DocumentStore: get {}/{}", collection, key);
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.get(key).cloned()))
    }

    async fn set(&self, collection: &str, key: &str, document: String) -> PresenceResult<()> {
        debug!("DocumentStore: set {}/{}", collection, key);
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), document);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &str) -> PresenceResult<bool> {
        debug!("DocumentStore: delete {}/{}", collection, key);
        Ok(self
            .collections
            .write()
            .get_mut(collection)
            .is_some_and(|docs| docs.remove(key).is_some()))
    }

    async fn scan_prefix(&self, collection: &str, prefix: &str) -> PresenceResult<Vec<(String, String)>> {
        debug!("DocumentStore: scan {}/{}*", collection, prefix);
        let collections = self.collections.read();
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, doc)| (key.clone(), doc.clone()))
            .collect())
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore").finish_non_exhaustive()
    }
}

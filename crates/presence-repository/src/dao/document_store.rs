//! DocumentStore trait — abstract key-value document store.
//!
//! Implementations own transport, consistency and locking. The engine
//! assumes at most last-writer-wins semantics per document.

use async_trait::async_trait;
use presence_core::{Interface, PresenceResult};

/// Low-level document store.
///
/// Documents are JSON strings addressed by `(collection, key)`.
/// Implementations report transport failures as `PresenceError::Upstream`.
#[async_trait]
pub trait DocumentStore: Interface + Send + Sync {
    /// Reads a document. Returns `None` if the key does not exist.
    async fn get(&self, collection: &str, key: &str) -> PresenceResult<Option<String>>;

    /// Writes a whole document, replacing any previous value.
    async fn set(&self, collection: &str, key: &str, document: String) -> PresenceResult<()>;

    /// Deletes a document. Returns `true` if it existed.
    async fn delete(&self, collection: &str, key: &str) -> PresenceResult<bool>;

    /// Returns every `(key, document)` in the collection whose key starts
    /// with `prefix`, ordered by key.
    async fn scan_prefix(&self, collection: &str, prefix: &str) -> PresenceResult<Vec<(String, String)>>;
}

//! DAO (Data Access Object) layer.
//!
//! The engine talks to its persistent store only through [`DocumentStore`]:
//! string keys, JSON string documents, grouped into named collections.
//!
//! Hierarchy:
//! ```text
//! Service → MonthlyPresenceRepository (interface + impl) → DocumentStore (interface + impl) → store
//! ```

pub mod document_store;
pub mod r#impl;

pub use document_store::DocumentStore;
pub use r#impl::InMemoryDocumentStore;

//! # Presence Repository
//!
//! Two-layer data access for monthly presence records:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn MonthlyPresenceRepository>  (domain interface)
//! MonthlyPresenceRepositoryImpl            (record ⇄ JSON document, key derivation)
//!   ↓  Arc<dyn DocumentStore>              (DAO interface)
//! InMemoryDocumentStore / external store
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                          ← MonthlyPresenceRepository trait
//!   impl/
//!     presence_repository_impl.rs      ← MonthlyPresenceRepositoryImpl
//!   dao/
//!     document_store.rs                ← DocumentStore trait
//!     impl/
//!       memory.rs                      ← InMemoryDocumentStore
//! ```

pub mod dao;
pub mod r#impl;
pub mod traits;

pub use dao::{DocumentStore, InMemoryDocumentStore};
pub use r#impl::{MonthlyPresenceRepositoryImpl, MonthlyPresenceRepositoryImplParameters, DEFAULT_COLLECTION};
pub use traits::*;

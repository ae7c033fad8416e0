//! DAO implementations.
//!
//! Networked stores live outside this crate and implement
//! [`DocumentStore`](crate::dao::DocumentStore) directly.

pub mod memory;

pub use memory::InMemoryDocumentStore;

//! Repository layer implementations.
//!
//! Trait definitions live in the parent module (`traits.rs`).

pub mod presence_repository_impl;

pub use presence_repository_impl::{
    MonthlyPresenceRepositoryImpl, MonthlyPresenceRepositoryImplParameters, DEFAULT_COLLECTION,
};

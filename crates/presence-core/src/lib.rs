//! # Presence Core
//!
//! Core types for the monthly presence engine: the error taxonomy, the
//! calendar utility, the compliance calculator, and the monthly presence
//! record. Everything in this crate is pure; storage and fan-out live in
//! the repository and service crates.

pub mod calendar;
pub mod compliance;
pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use compliance::{compute_stats, ComplianceRule, ComplianceStats};
pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;

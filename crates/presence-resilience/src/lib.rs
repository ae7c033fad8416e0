//! # Presence Resilience
//!
//! Deadline handling for calls that leave the engine. The overview fan-out
//! wraps every per-user fetch in [`with_timeout`].

pub mod timeout;

pub use timeout::*;

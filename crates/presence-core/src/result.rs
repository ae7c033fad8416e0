//! Result type aliases for the presence engine.

use crate::PresenceError;

/// A specialized `Result` type for presence operations.
pub type PresenceResult<T> = Result<T, PresenceError>;

//! Timeout wrapper for async operations.

use presence_core::PresenceError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Wraps an async operation with a timeout.
///
/// An elapsed deadline becomes `PresenceError::Timeout`; the inner future is
/// dropped at that point.
pub async fn with_timeout<F, Fut, T>(duration: Duration, f: F) -> Result<T, PresenceError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, PresenceError>>,
{
    match tokio::time::timeout(duration, f()).await {
        Ok(result) => result,
        Err(_) => {
            warn!(timeout_ms = duration.as_millis(), "Operation timed out");
            Err(PresenceError::Timeout(format!(
                "Operation timed out after {:?}",
                duration
            )))
        }
    }
}

//! Application configuration structures.

use presence_core::TelemetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Document store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Overview fan-out configuration.
    #[serde(default)]
    pub overview: OverviewConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TelemetryConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "presence-engine".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Collection that holds one document per (user, year, month).
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            collection: "monthlyPresence".to_string(),
        }
    }
}

/// Overview aggregation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    /// Maximum number of per-user fetches in flight.
    pub max_concurrency: usize,
    /// Deadline for a single per-user fetch, in milliseconds.
    pub fetch_timeout_ms: u64,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 8,
            fetch_timeout_ms: 5_000,
        }
    }
}

impl OverviewConfig {
    /// Returns the per-user fetch deadline as a Duration.
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

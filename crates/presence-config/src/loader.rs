//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use presence_core::PresenceError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `PRESENCE_` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, PresenceError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, PresenceError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), PresenceError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, PresenceError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("PRESENCE_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PRESENCE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_presence_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_presence_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    pub fn validate_config(config: &AppConfig) -> Result<(), PresenceError> {
        if config.store.collection.trim().is_empty() {
            return Err(PresenceError::Configuration(
                "store.collection must not be empty".to_string(),
            ));
        }

        if config.overview.max_concurrency == 0 {
            return Err(PresenceError::Configuration(
                "overview.max_concurrency must be at least 1".to_string(),
            ));
        }

        if config.overview.fetch_timeout_ms == 0 {
            return Err(PresenceError::Configuration(
                "overview.fetch_timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn config_error_to_presence_error(err: ConfigError) -> PresenceError {
    PresenceError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_loads_default_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[overview]\nmax_concurrency = 3\nfetch_timeout_ms = 1500\n\n[store]\ncollection = \"attendance\"\n",
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.overview.max_concurrency, 3);
        assert_eq!(config.overview.fetch_timeout_ms, 1500);
        assert_eq!(config.store.collection, "attendance");
    }

    #[tokio::test]
    async fn test_missing_directory_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().join("absent").to_string_lossy().to_string()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.overview, crate::OverviewConfig::default());
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.toml");
        fs::write(&path, "[overview]\nmax_concurrency = 2\nfetch_timeout_ms = 100\n").unwrap();

        let loader = ConfigLoader::new(dir.path().to_string_lossy().to_string()).unwrap();
        assert_eq!(loader.get().await.overview.max_concurrency, 2);

        fs::write(&path, "[overview]\nmax_concurrency = 16\nfetch_timeout_ms = 100\n").unwrap();
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.overview.max_concurrency, 16);
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let mut config = AppConfig::default();
        config.overview.max_concurrency = 0;
        assert!(matches!(
            ConfigLoader::validate_config(&config),
            Err(PresenceError::Configuration(_))
        ));
    }

    #[test]
    fn test_rejects_zero_timeout_and_blank_collection() {
        let mut config = AppConfig::default();
        config.overview.fetch_timeout_ms = 0;
        assert!(ConfigLoader::validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.store.collection = "  ".to_string();
        assert!(ConfigLoader::validate_config(&config).is_err());
    }
}

//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use gavel_core::GavelError;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Configuration loader with runtime refresh support.
#[derive(Clone, Debug)]
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
    /// 3. `config/local.toml` - Local overrides, not committed
    /// 4. Environment variables with `GAVEL__` prefix
    pub fn new(config_dir: impl Into<String>) -> Result<Self, GavelError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, GavelError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), GavelError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, GavelError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("GAVEL_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        let default_path = format!("{}/default.toml", config_dir);
        if Path::new(&default_path).exists() {
            debug!("Loading default config from: {}", default_path);
            builder = builder.add_source(File::with_name(&default_path).required(false));
        }

        let env_path = format!("{}/{}.toml", config_dir, environment);
        if Path::new(&env_path).exists() {
            debug!("Loading environment config from: {}", env_path);
            builder = builder.add_source(File::with_name(&env_path).required(false));
        }

        let local_path = format!("{}/local.toml", config_dir);
        if Path::new(&local_path).exists() {
            debug!("Loading local config from: {}", local_path);
            builder = builder.add_source(File::with_name(&local_path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("GAVEL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_error_to_gavel_error)?;

        let app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_gavel_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> Result<(), GavelError> {
        if config.database.url.is_empty() {
            return Err(GavelError::Configuration(
                "Database URL is required".to_string(),
            ));
        }

        if config.database.min_connections > config.database.max_connections {
            return Err(GavelError::Configuration(format!(
                "min_connections ({}) exceeds max_connections ({})",
                config.database.min_connections, config.database.max_connections
            )));
        }

        Ok(())
    }
}

fn config_error_to_gavel_error(err: ConfigError) -> GavelError {
    GavelError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, file: &str, contents: &str) {
        let mut f = std::fs::File::create(dir.join(file)).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_empty_dir_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.app.name, "gavel");
        assert_eq!(config.database.max_connections, 20);
    }

    #[tokio::test]
    async fn test_default_toml_overrides() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            r#"
            [database]
            url = "mysql://auction:auction@db:3306/auctions"
            max_connections = 8
            "#,
        );

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        let config = loader.get().await;
        assert_eq!(config.database.url, "mysql://auction:auction@db:3306/auctions");
        assert_eq!(config.database.max_connections, 8);
        // untouched fields keep their defaults
        assert_eq!(config.database.min_connections, 5);
    }

    #[tokio::test]
    async fn test_local_toml_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "default.toml", "[app]\nname = \"base\"\n");
        write_config(dir.path(), "local.toml", "[app]\nname = \"override\"\n");

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(loader.get().await.app.name, "override");
    }

    #[tokio::test]
    async fn test_reload_picks_up_changes() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "default.toml", "[database]\nmax_connections = 4\n");

        let loader = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(loader.get().await.database.max_connections, 4);

        write_config(dir.path(), "default.toml", "[database]\nmax_connections = 16\n");
        loader.reload().await.unwrap();
        assert_eq!(loader.get().await.database.max_connections, 16);
    }

    #[tokio::test]
    async fn test_rejects_empty_database_url() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "default.toml", "[database]\nurl = \"\"\n");

        let err = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }

    #[tokio::test]
    async fn test_rejects_inverted_pool_bounds() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            "default.toml",
            "[database]\nmin_connections = 30\nmax_connections = 2\n",
        );

        let err = ConfigLoader::new(dir.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
    }
}

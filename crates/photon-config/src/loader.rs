//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use photon_core::PhotonError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `PHOTON__` prefix (e.g. `PHOTON__SERVER__PORT`)
    /// 5. `REDIS_URL`, which overrides `redis.url`. A bare `host:port`
    ///    value is read as `redis://host:port`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self, PhotonError> {
        let config = Self::load_config(&config_dir.into())?;

        Ok(Self { config })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, PhotonError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &Path) -> Result<AppConfig, PhotonError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("PHOTON_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = config_dir.join(format!("{name}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PHOTON")
                .separator("__")
                .try_parsing(true),
        );

        builder = builder
            .set_override_option(
                "redis.url",
                std::env::var("REDIS_URL").ok().map(|url| normalize_redis_url(&url)),
            )
            .map_err(config_error_to_photon_error)?;

        let config = builder.build().map_err(config_error_to_photon_error)?;

        let mut app_config: AppConfig = config
            .try_deserialize()
            .map_err(config_error_to_photon_error)?;
        app_config.app.environment = environment;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| PhotonError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

/// Adds the `redis://` scheme to a bare `host:port` address.
fn normalize_redis_url(url: &str) -> String {
    let url = url.trim();
    if url.contains("://") {
        url.to_string()
    } else {
        format!("redis://{url}")
    }
}

fn config_error_to_photon_error(err: ConfigError) -> PhotonError {
    PhotonError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.cache.key, "photos");
        assert!(config.redis.enabled);
    }

    #[test]
    fn test_server_address() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "localhost:9090");
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[server]
port = 8181

[cache]
key = "photos:v2"
ttl_secs = 60

[upstream]
url = "http://127.0.0.1:3000/photos"
"#,
        )
        .unwrap();

        let loader = ConfigLoader::new(dir.path()).unwrap();
        let config = loader.get();

        assert_eq!(config.server.port, 8181);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.cache.key, "photos:v2");
        assert_eq!(config.cache.ttl_secs, 60);
        assert_eq!(config.upstream.url, "http://127.0.0.1:3000/photos");
        assert_eq!(config.upstream.timeout_secs, 30);
    }

    #[test]
    fn test_local_overrides_default() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[cache]\nttl_secs = 60\n").unwrap();
        fs::write(dir.path().join("local.toml"), "[cache]\nttl_secs = 0\n").unwrap();

        let config = ConfigLoader::new(dir.path()).unwrap().get();

        assert_eq!(config.cache.ttl(), None);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("default.toml"), "[server]\nport = 0\n").unwrap();

        let result = ConfigLoader::new(dir.path());

        assert!(matches!(result, Err(PhotonError::Configuration(_))));
    }

    #[test]
    fn test_normalize_redis_url() {
        assert_eq!(normalize_redis_url("localhost:9876"), "redis://localhost:9876");
        assert_eq!(normalize_redis_url(" redis-host:6379 "), "redis://redis-host:6379");
        assert_eq!(normalize_redis_url("redis://cache:6379/1"), "redis://cache:6379/1");
        assert_eq!(normalize_redis_url("rediss://cache:6380"), "rediss://cache:6380");
    }

    #[test]
    fn test_bare_redis_url_env_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("REDIS_URL", "localhost:9876");

        let result = ConfigLoader::new(dir.path());
        std::env::remove_var("REDIS_URL");

        let config = result.unwrap().get();
        assert_eq!(config.redis.url, "redis://localhost:9876");
    }
}

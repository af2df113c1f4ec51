//! Application configuration loading from config.toml
//!
//! Every setting has a default, so a missing file is not an error. Environment
//! variables (`DATABASE_URL`, `SERVER_HOST`, `SERVER_PORT`) take precedence over the
//! file. The file location can be changed with `CROWDFUNDING_CONFIG`.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener settings
    pub server: ServerConfig,
    /// Store settings
    pub database: DatabaseConfig,
    /// Values reported by the profile endpoint
    pub profile: ProfileConfig,
}

/// Where the HTTP server listens
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SeaORM connection URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://crowdfunding.sqlite?mode=rwc".to_string(),
        }
    }
}

/// Deployment profile information
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Free text returned by `GET /api/investments/profile`
    pub validate_data: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            validate_data: "default".to_string(),
        }
    }
}

/// Parses configuration from a TOML string.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file, falling back to defaults when it is absent.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        info!("No configuration file at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    debug!("Loading configuration from {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    parse_config(&contents)
}

impl AppConfig {
    /// Applies overrides from `lookup` (normally `std::env::var`).
    ///
    /// # Errors
    /// Returns an error if `SERVER_PORT` is set but is not a valid port number.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = url;
        }
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = port.parse().map_err(|e| Error::Config {
                message: format!("Invalid SERVER_PORT {port:?}: {e}"),
            })?;
        }
        Ok(())
    }
}

/// Loads the file named by `CROWDFUNDING_CONFIG` (or `./config.toml`) and applies
/// environment overrides.
///
/// # Errors
/// Returns an error if the file cannot be parsed or an override is invalid.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path =
        std::env::var("CROWDFUNDING_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = load_config(&path)?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

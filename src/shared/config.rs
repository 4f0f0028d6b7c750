//! Application configuration module
//!
//! Provides configuration types for the client: the server URL the REST and
//! push clients talk to, and the notification poll interval.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Default notification poll interval, in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
    /// Notification poll interval
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

/// On-disk configuration file shape (TOML)
#[derive(Debug, Deserialize)]
struct AppConfigFile {
    server_url: Option<String>,
    poll_interval_secs: Option<u64>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let file: AppConfigFile =
            toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut builder = Self::builder();
        if let Some(url) = file.server_url {
            builder = builder.server_url(url);
        }
        if let Some(secs) = file.poll_interval_secs {
            builder = builder.poll_interval(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::MissingValue("poll_interval"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    poll_interval: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: String) -> Self {
        self.server_url = Some(url);
        self
    }

    /// Set the notification poll interval
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            poll_interval: self
                .poll_interval
                .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("config file error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
}

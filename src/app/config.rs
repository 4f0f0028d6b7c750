use std::path::PathBuf;
use std::time::Duration;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Application configuration wrapper.
///
/// Resolution order: explicit builder, then the `PORTAL_API_URL` environment
/// variable, then the user config file, then the built-in default.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        if let Ok(url) = std::env::var("PORTAL_API_URL") {
            if let Ok(app) = AppConfig::builder().server_url(url).build() {
                return Self { app };
            }
        }

        if let Some(path) = Self::config_file_path() {
            if let Ok(app) = AppConfig::load(&path) {
                return Self { app };
            }
        }

        let app = AppConfig::builder()
            .server_url(DEFAULT_SERVER_URL.to_string())
            .build()
            .expect("default app config is valid");
        Self { app }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// The user config file location, if a config directory exists
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("uniportal").join("config.toml"))
    }

    /// Get the server URL
    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Get the notification poll interval
    pub fn poll_interval(&self) -> Duration {
        self.app.poll_interval
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_path() {
        let config = Config::with_builder(
            AppConfig::builder().server_url("http://localhost:9000".to_string()),
        )
        .unwrap();
        assert_eq!(
            config.api_url("/notifications/get/u-1"),
            "http://localhost:9000/notifications/get/u-1"
        );
    }
}

//! Configuration management for the pizza admin console

use pizza_protocol::DashboardSettings;
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

/// Base name of the optional configuration file (`pizza-admin.toml`, `.yaml`, ...)
pub const CONFIG_FILE_NAME: &str = "pizza-admin";

/// Prefix of configuration environment variables, e.g. `PIZZA_SERVICE__BASE_URL`
pub const ENV_PREFIX: &str = "PIZZA";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Platform service connection
    #[serde(default)]
    pub service: ServiceConfig,

    /// Dashboard page sizes
    #[serde(default)]
    pub dashboard: DashboardSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Platform service connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL the `/api/...` paths are appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServiceConfig {
    /// Per-request timeout
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Output format of log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable text
    Text,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from `pizza-admin.*` in the working directory and
    /// `PIZZA_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, reading `file` instead of the default file name
    ///
    /// An explicit file must exist; the default one is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load_from(file: Option<&Path>) -> crate::Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let config: Self = config::Config::builder()
            .add_source(file_source)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid field.
    pub fn validate(&self) -> crate::Result<()> {
        let base_url = self.service.base_url.trim();
        if base_url.is_empty() {
            return Err(crate::Error::configuration("service.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(crate::Error::configuration(format!(
                "service.base_url must be an http(s) URL, got {base_url}"
            )));
        }
        if self.service.request_timeout_secs == 0 {
            return Err(crate::Error::configuration(
                "service.request_timeout_secs must be positive",
            ));
        }
        Ok(())
    }
}

//! Configuration, logging and core errors for the pizza admin console

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, LogFormat, LoggingConfig, ServiceConfig};
pub use error::{Error, Result};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if the level is not a valid filter directive or a global
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Logging {
            message: format!("invalid log level {:?}: {e}", config.level),
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match config.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };

    installed.map_err(|e| Error::Logging {
        message: e.to_string(),
    })?;

    tracing::debug!(level = %config.level, format = ?config.format, "logging initialized");
    Ok(())
}

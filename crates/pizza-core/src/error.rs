//! Error types for the pizza admin console core

use std::{error::Error as StdError, fmt};

/// Main error type of the core crate
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Logging could not be initialized
    Logging {
        /// Error message
        message: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Configuration error from any displayable cause
    pub fn configuration(message: impl fmt::Display) -> Self {
        Self::Configuration {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Logging { message } => write!(f, "Logging error: {message}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::Configuration { .. } | Self::Logging { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::configuration(err)
    }
}

#[cfg(test)]
#[allow(clippy::uninlined_format_args, clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "pizza-admin.toml");
        let error = Error::from(io_error);

        assert!(matches!(error, Error::Io(_)));
        assert!(format!("{}", error).contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::configuration("base_url must not be empty");

        assert_eq!(
            format!("{}", error),
            "Configuration error: base_url must not be empty"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_logging_error() {
        let error = Error::Logging {
            message: "global subscriber already set".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Logging error: global subscriber already set"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = Error::from(json_error);

        assert!(matches!(error, Error::Serialization(_)));
        assert!(error.to_string().starts_with("Serialization error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_error_conversion() {
        let error = Error::from(config::ConfigError::NotFound("service".to_string()));
        assert!(matches!(error, Error::Configuration { .. }));
    }
}

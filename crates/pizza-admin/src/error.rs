//! Error types for the admin dashboard

use std::fmt;
use thiserror::Error;

/// Result type alias for platform service calls
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result type alias for dashboard operations
pub type AdminResult<T> = Result<T, AdminError>;

/// Failures of a platform service call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request never produced a response
    #[error("Failed to reach the pizza service: {message}")]
    Transport {
        /// Error message
        message: String,
    },

    /// The service answered with a non-success status
    #[error("Pizza service returned {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message from the response body, or the status reason
        message: String,
    },

    /// The caller is not signed in or lacks the required role
    #[error("Not authorized")]
    Unauthorized,

    /// The response body did not have the expected shape
    #[error("Unexpected response from the pizza service: {message}")]
    Decode {
        /// Error message
        message: String,
    },
}

impl ServiceError {
    /// Transport failure from any displayable cause
    pub fn transport(cause: impl fmt::Display) -> Self {
        Self::Transport {
            message: cause.to_string(),
        }
    }

    /// Decode failure from any displayable cause
    pub fn decode(cause: impl fmt::Display) -> Self {
        Self::Decode {
            message: cause.to_string(),
        }
    }

    /// Error for a non-success status
    ///
    /// 401 always maps to [`Self::Unauthorized`].
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        if status == 401 {
            Self::Unauthorized
        } else {
            Self::Status {
                status,
                message: message.into(),
            }
        }
    }
}

/// Failures of a dashboard operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// A service call failed
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The viewer does not hold the admin role
    #[error("Admin role required")]
    NotAuthorized,
}

#[cfg(test)]
#[allow(clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_401_is_unauthorized() {
        assert_eq!(ServiceError::status(401, "unauthorized"), ServiceError::Unauthorized);
    }

    #[test]
    fn test_status_display() {
        let error = ServiceError::status(500, "database offline");
        assert_eq!(
            format!("{}", error),
            "Pizza service returned 500: database offline"
        );
    }

    #[test]
    fn test_transport_display() {
        let error = ServiceError::transport("connection refused");
        assert_eq!(
            error.to_string(),
            "Failed to reach the pizza service: connection refused"
        );
    }

    #[test]
    fn test_admin_error_is_transparent_over_service_errors() {
        let error = AdminError::from(ServiceError::decode("missing field `users`"));
        assert_eq!(
            error.to_string(),
            "Unexpected response from the pizza service: missing field `users`"
        );
        assert_eq!(AdminError::NotAuthorized.to_string(), "Admin role required");
    }
}

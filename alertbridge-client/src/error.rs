//! Error types for the Alertmanager client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when delivering alerts
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Alertmanager returned an error status code
    #[error("Alertmanager error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body returned by Alertmanager
        message: String,
    },

    /// Endpoint URL could not be used
    #[error("Invalid Alertmanager URL: {0}")]
    InvalidEndpoint(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ClientError::api_error(400, "maxFailures exceeded");
        assert_eq!(
            err.to_string(),
            "Alertmanager error (status 400): maxFailures exceeded"
        );
    }

    #[test]
    fn test_invalid_endpoint_display() {
        let err =
            ClientError::InvalidEndpoint("ftp://am: scheme must be http or https".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid Alertmanager URL: ftp://am: scheme must be http or https"
        );
    }
}

//! Error types for REST API operations

use reqwest::StatusCode;

use crate::types::ExchangeError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed at the transport level (DNS, TLS, connection)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authenticated call attempted without a complete key/secret pair
    #[error("API key and secret are required for this endpoint")]
    MissingCredentials,

    /// The configured timeout elapsed before the transport produced a result
    #[error("timeout on reading data from SouthXchange API")]
    Timeout,

    /// Non-200/401 HTTP status; the message carries the status line and the
    /// trimmed response body
    #[error("{status}: {body}")]
    Api {
        /// HTTP status returned by the service
        status: StatusCode,
        /// Response body with surrounding quote characters stripped
        body: String,
    },

    /// The service answered with its own error payload
    #[error("exchange error: {0}")]
    Exchange(ExchangeError),

    /// Response body did not match the expected JSON shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Environment variable not set
    #[error("environment variable not set: {0}")]
    EnvVar(String),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_status_line() {
        let err = RestError::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "Internal error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("Internal error"));
    }

    #[test]
    fn test_env_var_error_names_the_variable() {
        let err = RestError::EnvVar("SOUTHXCHANGE_API_KEY".to_string());
        assert!(err.to_string().contains("SOUTHXCHANGE_API_KEY"));
    }
}

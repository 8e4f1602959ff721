//! Error types for the Tradier brokerage integration.

use thiserror::Error;

/// Errors that can occur when talking to Tradier.
///
/// Every non-2xx response collapses into [`TradierError::Api`], which
/// carries the status code and the raw response body. Callers that
/// surface errors to a page or terminal get both without needing to
/// distinguish authentication failures from application-level ones.
#[derive(Debug, Error)]
pub enum TradierError {
    /// Configuration error (missing or invalid credentials).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// API request returned a non-success status.
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body from the API.
        message: String,
    },

    /// Network error.
    #[error("network error: {0}")]
    Network(String),

    /// Request timeout.
    #[error("request timeout: {0}")]
    Timeout(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl TradierError {
    /// Creates an API error from status code and response body.
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

impl From<reqwest::Error> for TradierError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Network(format!("connection failed: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TradierError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Tradier operations.
pub type Result<T> = std::result::Result<T, TradierError>;

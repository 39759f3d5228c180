//! HTTP transport error types

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for HTTP operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// HTTP transport errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network request failed
    #[error("Network request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid default header
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Non-success response from the backend
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: StatusCode, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Client build error
    #[error("Failed to build HTTP client: {0}")]
    BuildError(String),
}

impl HttpError {
    /// Status code of the failed response, if the backend answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            HttpError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend answered with exactly this status
    pub fn has_status(&self, expected: StatusCode) -> bool {
        self.status() == Some(expected)
    }
}

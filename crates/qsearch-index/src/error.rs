//! Index client error types

use std::time::Duration;

use qsearch_http::HttpError;
use thiserror::Error;

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;

/// Index client errors
#[derive(Debug, Error)]
pub enum IndexError {
    /// Transport failure, including retry exhaustion
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The caller's deadline ran out while the call was still retrying
    #[error("Search deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// Endpoint could not be turned into a request URL
    #[error("Invalid index endpoint: {0}")]
    InvalidEndpoint(String),

    /// Request payload could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

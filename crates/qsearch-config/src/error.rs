//! Configuration error types

use thiserror::Error;

/// Configuration result type
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value the service cannot start without
    #[error("{0} not found in config")]
    Missing(&'static str),

    #[error("Invalid Typesense URI {0}")]
    InvalidUri(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

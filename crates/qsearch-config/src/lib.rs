//! qsearch configuration
//!
//! Loads settings from an optional TOML file overlaid by `QSEARCH__*`
//! environment variables, and resolves the Typesense endpoint and key the
//! gateway cannot start without.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{normalize_endpoint, AppConfig, HttpSettings, RuntimeEnvironment, ServerConfig, TypesenseConfig, DEFAULT_TYPESENSE_PORT};

//! Configuration types and data structures

use std::{fmt, net::SocketAddr, time::Duration};

use qsearch_http::{HttpConfig, RetryPolicy};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, Result};

/// Port Typesense listens on when the URI does not name one
pub const DEFAULT_TYPESENSE_PORT: u16 = 8108;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub typesense: TypesenseConfig,
    pub http: HttpSettings,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RuntimeEnvironment {
    Development,
    #[default]
    Production,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API binds to
    pub listen: SocketAddr,
    /// Development mounts the OpenAPI document
    pub environment: RuntimeEnvironment,
}

/// Search backend location and credentials
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypesenseConfig {
    /// Node URI; `typesense://` is accepted as an alias for `http://`
    pub uri: Option<String>,
    pub api_key: Option<String>,
    /// Deadline for one search call, retries included
    pub search_timeout_secs: u64,
}

/// Outbound transport tuning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
    pub max_retry_delay_ms: u64,
    pub jitter: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 8080)),
            environment: RuntimeEnvironment::default(),
        }
    }
}

impl Default for TypesenseConfig {
    fn default() -> Self {
        Self {
            uri: None,
            api_key: None,
            search_timeout_secs: 30,
        }
    }
}

impl fmt::Debug for TypesenseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypesenseConfig")
            .field("uri", &self.uri)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("search_timeout_secs", &self.search_timeout_secs)
            .finish()
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        let retry = RetryPolicy::default();
        Self {
            timeout_secs: 10,
            connect_timeout_secs: 5,
            max_attempts: retry.max_attempts,
            retry_delay_ms: retry.base_delay.as_millis() as u64,
            max_retry_delay_ms: retry.max_delay.as_millis() as u64,
            jitter: retry.jitter,
        }
    }
}

impl AppConfig {
    /// Check that everything needed to start is present and well formed
    pub fn validate(&self) -> Result<()> {
        self.typesense.endpoint()?;
        self.typesense.api_key()?;

        if self.http.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "http.max_attempts must be greater than 0".to_string(),
            ));
        }
        if self.typesense.search_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "typesense.search_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl TypesenseConfig {
    /// Normalized base URL of the Typesense node
    pub fn endpoint(&self) -> Result<Url> {
        let raw = non_empty(self.uri.as_deref()).ok_or(ConfigError::Missing("Typesense URI"))?;
        normalize_endpoint(raw)
    }

    pub fn api_key(&self) -> Result<&str> {
        non_empty(self.api_key.as_deref()).ok_or(ConfigError::Missing("Typesense Api Key"))
    }

    pub fn search_deadline(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}

impl HttpSettings {
    /// Transport configuration with the retry policy these settings describe
    pub fn to_http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            retry: RetryPolicy {
                max_attempts: self.max_attempts,
                base_delay: Duration::from_millis(self.retry_delay_ms),
                max_delay: Duration::from_millis(self.max_retry_delay_ms),
                jitter: self.jitter,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Turn a configured node URI into an HTTP base URL.
///
/// Only scheme, host and port are kept. `typesense://` maps to `http://` and
/// defaults to port 8108; `http`/`https` keep their usual default ports.
pub fn normalize_endpoint(raw: &str) -> Result<Url> {
    let parsed = Url::parse(raw).map_err(|e| ConfigError::InvalidUri(format!("'{raw}': {e}")))?;

    let (scheme, default_port) = match parsed.scheme().to_ascii_lowercase().as_str() {
        "typesense" => ("http", DEFAULT_TYPESENSE_PORT),
        "http" => ("http", 80),
        "https" => ("https", 443),
        other => {
            return Err(ConfigError::InvalidUri(format!(
                "'{raw}': unsupported scheme '{other}'"
            )))
        }
    };

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| ConfigError::InvalidUri(format!("'{raw}': missing host")))?;
    let port = parsed.port().unwrap_or(default_port);

    Url::parse(&format!("{scheme}://{host}:{port}"))
        .map_err(|e| ConfigError::InvalidUri(format!("'{raw}': {e}")))
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

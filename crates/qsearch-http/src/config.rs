//! HTTP client configuration

use std::{collections::BTreeMap, fmt, time::Duration};

use serde::{Deserialize, Serialize};

use crate::middleware::RetryPolicy;

/// HTTP client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Timeout for a single attempt
    #[serde(default = "default_timeout")]
    pub timeout: Duration,

    /// Connection timeout
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: Duration,

    /// Retry policy applied to every request
    #[serde(default)]
    pub retry: RetryPolicy,

    /// Custom user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Pool idle timeout
    #[serde(default = "default_pool_idle_timeout")]
    pub pool_idle_timeout: Duration,

    /// Headers sent with every request. Values are marked sensitive.
    #[serde(default, skip_serializing)]
    pub default_headers: BTreeMap<String, String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            retry: RetryPolicy::default(),
            user_agent: default_user_agent(),
            pool_idle_timeout: default_pool_idle_timeout(),
            default_headers: BTreeMap::new(),
        }
    }
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("retry", &self.retry)
            .field("user_agent", &self.user_agent)
            .field("pool_idle_timeout", &self.pool_idle_timeout)
            .field("default_headers", &self.default_headers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl HttpConfig {
    /// Replace the retry policy
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Add a header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }
}

// Default value functions for serde
fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_user_agent() -> String {
    format!("qsearch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_pool_idle_timeout() -> Duration {
    Duration::from_secs(90)
}

//! HTTP client implementation

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Method, Response,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    config::HttpConfig,
    error::{HttpError, Result},
    middleware::RetryMiddleware,
};

/// Mockable HTTP client trait
///
/// Every method goes through the retry middleware, so callers see either a
/// successful response or the final failure.
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Execute a GET request
    async fn get(&self, url: &str) -> Result<Response>;

    /// Execute a POST request with a JSON body
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Response>;

    /// Execute a custom HTTP request. `body`, when present, is sent as JSON.
    async fn request(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<Response>;
}

/// Production HTTP client
pub struct HttpClient {
    inner: reqwest::Client,
    config: HttpConfig,
    retry: RetryMiddleware,
}

impl HttpClient {
    /// Create a new HTTP client with configuration
    pub fn new(config: HttpConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .pool_idle_timeout(config.pool_idle_timeout)
            .default_headers(default_headers(&config)?)
            .build()
            .map_err(|e| HttpError::BuildError(e.to_string()))?;

        Ok(Self {
            inner,
            retry: RetryMiddleware::new(config.retry.clone()),
            config,
        })
    }

    /// One attempt, no retry
    async fn send_once(&self, method: Method, url: url::Url, body: Option<Vec<u8>>) -> Result<Response> {
        let mut request = self.inner.request(method, url);

        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout(self.config.timeout)
            } else {
                HttpError::RequestFailed(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HttpError::HttpStatus {
                status,
                message: error_message(&body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get(&self, url: &str) -> Result<Response> {
        debug!("HTTP GET: {}", url);
        self.request(Method::GET, url, None).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<Response> {
        debug!("HTTP POST: {}", url);
        let body = serde_json::to_vec(body).map_err(|e| HttpError::Decode(e.to_string()))?;
        self.request(Method::POST, url, Some(body)).await
    }

    async fn request(&self, method: Method, url: &str, body: Option<Vec<u8>>) -> Result<Response> {
        let url = url
            .parse::<url::Url>()
            .map_err(|e| HttpError::InvalidUrl(e.to_string()))?;

        self.retry
            .execute(|| self.send_once(method.clone(), url.clone(), body.clone()))
            .await
    }
}

/// Decode a successful response body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| HttpError::Decode(e.to_string()))
}

/// Create a shared HTTP client (Arc-wrapped for cloning)
pub fn shared_client(config: HttpConfig) -> Result<Arc<dyn HttpClientTrait>> {
    Ok(Arc::new(HttpClient::new(config)?))
}

fn default_headers(config: &HttpConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.default_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HttpError::InvalidHeader(format!("{name}: {e}")))?;
        let mut value = HeaderValue::from_str(value)
            .map_err(|e| HttpError::InvalidHeader(format!("{name}: {e}")))?;
        value.set_sensitive(true);
        headers.insert(name, value);
    }
    Ok(headers)
}

/// Backends answer errors as `{"message": "..."}`; fall back to the raw body
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

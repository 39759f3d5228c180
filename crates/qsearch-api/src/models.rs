//! API request and response models

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query string of both search endpoints
#[derive(Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Search text; `/search` also accepts one inline `[tag]`. Missing means
    /// empty; when repeated, the first value is used.
    pub query: String,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for SearchParams {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        let query = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "query").then_some(value))
            .unwrap_or_default();
        Ok(Self { query })
    }
}

/// RFC 9457 problem details body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    /// Problem type URI
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short summary
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Diagnostic detail (the backend's message)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// API health response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}

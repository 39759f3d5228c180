//! Liveness and health endpoints

use axum::{extract::State, Json};

use crate::{models::HealthResponse, state::AppState};

/// Liveness probe; answers as long as the process serves requests
#[utoipa::path(
    get,
    path = "/alive",
    responses(
        (status = 200, description = "Process is up", body = String, content_type = "text/plain")
    )
)]
pub async fn alive() -> &'static str {
    "Healthy"
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_seconds(),
    })
}

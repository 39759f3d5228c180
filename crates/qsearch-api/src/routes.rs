//! API route definitions

use axum::{routing::get, Json, Router};
use qsearch_config::RuntimeEnvironment;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    handlers::{health, search},
    middleware::logging_middleware,
    state::AppState,
};

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi/v1.json";

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Search
        .route("/search/similar-titles", get(search::similar_titles))
        .route("/search", get(search::search))
        // Probes
        .route("/alive", get(health::alive))
        .route("/health", get(health::health_check))
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

/// OpenAPI document route
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
}

/// Combined routes; the OpenAPI document is only served in development
pub fn all_routes(environment: RuntimeEnvironment) -> Router<AppState> {
    match environment {
        RuntimeEnvironment::Development => api_routes().merge(openapi_routes()),
        RuntimeEnvironment::Production => api_routes(),
    }
}

/// Build the router with state attached
pub fn build_router(state: AppState, environment: RuntimeEnvironment) -> Router {
    all_routes(environment).with_state(state)
}

/// OpenAPI document for the search API
#[derive(OpenApi)]
#[openapi(
    paths(
        search::similar_titles,
        search::search,
        health::alive,
        health::health_check,
    ),
    components(schemas(
        qsearch_core::SearchDocument,
        crate::models::ProblemDetails,
        crate::models::HealthResponse,
    )),
    info(
        title = "qsearch API",
        version = "1.0.0",
        description = "Full-text search over the questions index"
    )
)]
pub struct ApiDoc;

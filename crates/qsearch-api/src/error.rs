//! API error types and handling

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use qsearch_index::{HttpError, IndexError};
use thiserror::Error;

use crate::models::ProblemDetails;

/// Title of the problem response for any failed backend search
pub const SEARCH_FAILED_TITLE: &str = "Typesense search failed";

const SERVER_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc9110#section-15.6.1";

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend call failed; carries the backend's message
    #[error("Search failed: {0}")]
    SearchFailed(String),
}

impl From<IndexError> for ApiError {
    fn from(err: IndexError) -> Self {
        // The backend's own message when it answered, otherwise what went wrong locally
        match err {
            IndexError::Http(HttpError::HttpStatus { message, .. }) => ApiError::SearchFailed(message),
            other => ApiError::SearchFailed(other.to_string()),
        }
    }
}

impl ApiError {
    fn problem(&self) -> (StatusCode, ProblemDetails) {
        match self {
            ApiError::SearchFailed(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ProblemDetails {
                    problem_type: SERVER_ERROR_TYPE.to_string(),
                    title: SEARCH_FAILED_TITLE.to_string(),
                    status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    detail: Some(detail.clone()),
                },
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, problem) = self.problem();
        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(problem),
        )
            .into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

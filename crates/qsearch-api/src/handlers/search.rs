//! Search endpoints

use axum::{extract::State, Json};
use qsearch_core::SearchDocument;

use crate::{error::ApiResult, models::SearchParams, state::AppState};

/// Questions whose titles resemble the query
#[utoipa::path(
    get,
    path = "/search/similar-titles",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching questions in ranked order", body = [SearchDocument]),
        (status = 500, description = "Typesense search failed", body = crate::models::ProblemDetails, content_type = "application/problem+json")
    )
)]
pub async fn similar_titles(
    State(state): State<AppState>,
    params: SearchParams,
) -> ApiResult<Json<Vec<SearchDocument>>> {
    let documents = state.search.similar_titles(&params.query).await?;
    Ok(Json(documents))
}

/// Search titles and content; `[tag]` in the query filters by tag
#[utoipa::path(
    get,
    path = "/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching questions in ranked order", body = [SearchDocument]),
        (status = 500, description = "Typesense search failed", body = crate::models::ProblemDetails, content_type = "application/problem+json")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    params: SearchParams,
) -> ApiResult<Json<Vec<SearchDocument>>> {
    let documents = state.search.search(&params.query).await?;
    Ok(Json(documents))
}

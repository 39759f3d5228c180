//! Search operations behind the HTTP handlers

use std::sync::Arc;

use qsearch_core::{build_search_request, parse_query, ParsedQuery, SearchDocument, SearchMode, SearchRequest, QUESTIONS_COLLECTION};
use qsearch_index::IndexClient;
use tracing::error;

use crate::error::ApiResult;

/// Runs searches against the questions collection
#[derive(Clone)]
pub struct SearchService {
    index: Arc<dyn IndexClient>,
}

impl SearchService {
    /// Create a service over an index client
    pub fn new(index: Arc<dyn IndexClient>) -> Self {
        Self { index }
    }

    /// Title lookup. The raw query is used as-is; brackets are not parsed.
    pub async fn similar_titles(&self, query: &str) -> ApiResult<Vec<SearchDocument>> {
        let request = build_search_request(&ParsedQuery::untagged(query), SearchMode::TitleOnly);
        self.execute(request).await
    }

    /// Full search over title and content with optional `[tag]` filter
    pub async fn search(&self, query: &str) -> ApiResult<Vec<SearchDocument>> {
        let request = build_search_request(&parse_query(query), SearchMode::TitleAndContent);
        self.execute(request).await
    }

    async fn execute(&self, request: SearchRequest) -> ApiResult<Vec<SearchDocument>> {
        self.index
            .search(QUESTIONS_COLLECTION, &request)
            .await
            .map_err(|e| {
                error!("Search for {:?} failed: {}", request.query_text, e);
                e.into()
            })
    }
}

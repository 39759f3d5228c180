//! Typesense REST implementation of [`IndexClient`]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use qsearch_core::{IndexSchema, SearchDocument, SearchRequest};
use qsearch_http::{read_json, shared_client, HttpClientTrait, HttpConfig, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::{
    client::IndexClient,
    error::{IndexError, Result},
};

/// Header carrying the Typesense API key
pub const API_KEY_HEADER: &str = "X-TYPESENSE-API-KEY";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    document: SearchDocument,
}

/// Typesense client
pub struct TypesenseClient {
    http: Arc<dyn HttpClientTrait>,
    base_url: Url,
    search_deadline: Option<Duration>,
}

impl TypesenseClient {
    /// Wrap an existing transport
    pub fn new(http: Arc<dyn HttpClientTrait>, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            search_deadline: None,
        }
    }

    /// Build a retrying transport that authenticates with `api_key`
    pub fn connect(base_url: Url, api_key: &str, http_config: HttpConfig) -> Result<Self> {
        let http = shared_client(http_config.with_header(API_KEY_HEADER, api_key))?;
        Ok(Self::new(http, base_url))
    }

    /// Bound each search, retries included, by `deadline`
    pub fn with_search_deadline(mut self, deadline: Duration) -> Self {
        self.search_deadline = Some(deadline);
        self
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| IndexError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn search_url(&self, collection: &str, request: &SearchRequest) -> Result<Url> {
        let mut url = self.endpoint(&["collections", collection, "documents", "search"])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("q", &request.query_text);
            query.append_pair("query_by", &request.query_by());
            if let Some(filter) = &request.filter_expression {
                query.append_pair("filter_by", filter);
            }
        }
        Ok(url)
    }

    async fn run_search(&self, url: Url) -> Result<Vec<SearchDocument>> {
        let response = self.http.get(url.as_str()).await?;
        let body: SearchResponse = read_json(response).await?;
        Ok(body.hits.into_iter().map(|hit| hit.document).collect())
    }
}

#[async_trait]
impl IndexClient for TypesenseClient {
    async fn search(&self, collection: &str, request: &SearchRequest) -> Result<Vec<SearchDocument>> {
        let url = self.search_url(collection, request)?;
        debug!(
            "Searching '{}' (query_by={}, filter_by={:?})",
            collection,
            request.query_by(),
            request.filter_expression
        );

        match self.search_deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.run_search(url))
                .await
                .map_err(|_| IndexError::DeadlineExceeded(deadline))?,
            None => self.run_search(url).await,
        }
    }

    async fn collection_exists(&self, name: &str) -> Result<bool> {
        let url = self.endpoint(&["collections", name])?;
        match self.http.get(url.as_str()).await {
            Ok(_) => Ok(true),
            Err(e) if e.has_status(StatusCode::NOT_FOUND) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn create_collection(&self, schema: &IndexSchema) -> Result<()> {
        let url = self.endpoint(&["collections"])?;
        let body = serde_json::to_value(schema)?;
        match self.http.post_json(url.as_str(), &body).await {
            Ok(_) => Ok(()),
            Err(e) if e.has_status(StatusCode::CONFLICT) => {
                info!("Collection '{}' was created concurrently", schema.name);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

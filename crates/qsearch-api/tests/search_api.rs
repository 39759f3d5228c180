//! Router-level tests against a scripted index

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use qsearch_api::{routes::build_router, AppState};
use qsearch_config::RuntimeEnvironment;
use qsearch_core::{IndexSchema, SearchDocument, SearchRequest};
use qsearch_index::{IndexClient, IndexError, Result};
use serde_json::Value;
use tower::ServiceExt;

#[derive(Default)]
struct FakeIndex {
    documents: Vec<SearchDocument>,
    failure: Option<String>,
    seen: Mutex<Vec<SearchRequest>>,
}

#[async_trait]
impl IndexClient for FakeIndex {
    async fn search(&self, _collection: &str, request: &SearchRequest) -> Result<Vec<SearchDocument>> {
        self.seen.lock().unwrap().push(request.clone());
        match &self.failure {
            Some(message) => Err(IndexError::InvalidEndpoint(message.clone())),
            None => Ok(self.documents.clone()),
        }
    }

    async fn collection_exists(&self, _name: &str) -> Result<bool> {
        Ok(true)
    }

    async fn create_collection(&self, _schema: &IndexSchema) -> Result<()> {
        Ok(())
    }
}

fn doc(id: &str, title: &str) -> SearchDocument {
    SearchDocument {
        id: id.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

fn app(index: Arc<FakeIndex>, environment: RuntimeEnvironment) -> Router {
    build_router(AppState::new(index), environment)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, content_type, body)
}

#[tokio::test]
async fn test_search_returns_documents_in_order() {
    let index = Arc::new(FakeIndex {
        documents: vec![doc("2", "second"), doc("1", "first")],
        ..Default::default()
    });

    let (status, _, body) = get(app(index, RuntimeEnvironment::Production), "/search?query=parse").await;

    assert_eq!(status, StatusCode::OK);
    let documents: Vec<SearchDocument> = serde_json::from_slice(&body).unwrap();
    let ids: Vec<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
}

#[tokio::test]
async fn test_search_routes_tag_into_filter() {
    let index = Arc::new(FakeIndex::default());

    let (status, _, _) = get(
        app(index.clone(), RuntimeEnvironment::Production),
        "/search?query=how%20to%20parse%20%5Bcsharp%5D%20strings",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let seen = index.seen.lock().unwrap();
    assert_eq!(seen[0].query_text, "how to parse strings");
    assert_eq!(seen[0].query_by(), "title,content");
    assert_eq!(seen[0].filter_expression.as_deref(), Some("tags:=[csharp]"));
}

#[tokio::test]
async fn test_similar_titles_keeps_brackets() {
    let index = Arc::new(FakeIndex::default());

    get(
        app(index.clone(), RuntimeEnvironment::Production),
        "/search/similar-titles?query=%5Brust%5D%20borrow",
    )
    .await;

    let seen = index.seen.lock().unwrap();
    assert_eq!(seen[0].query_text, "[rust] borrow");
    assert_eq!(seen[0].query_by(), "title");
    assert!(seen[0].filter_expression.is_none());
}

#[tokio::test]
async fn test_missing_query_is_empty_search() {
    let index = Arc::new(FakeIndex::default());

    let (status, _, body) = get(app(index.clone(), RuntimeEnvironment::Production), "/search").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"[]");
    assert_eq!(index.seen.lock().unwrap()[0].query_text, "");
}

#[tokio::test]
async fn test_repeated_query_uses_first_value() {
    let index = Arc::new(FakeIndex::default());

    let (status, _, _) = get(
        app(index.clone(), RuntimeEnvironment::Production),
        "/search?query=first%20%5Brust%5D&query=second",
    )
    .await;
    let (similar_status, _, _) = get(
        app(index.clone(), RuntimeEnvironment::Production),
        "/search/similar-titles?query=a&query=b",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(similar_status, StatusCode::OK);
    let seen = index.seen.lock().unwrap();
    assert_eq!(seen[0].query_text, "first");
    assert_eq!(seen[0].filter_expression.as_deref(), Some("tags:=[rust]"));
    assert_eq!(seen[1].query_text, "a");
}

#[tokio::test]
async fn test_unrelated_parameters_are_ignored() {
    let index = Arc::new(FakeIndex::default());

    let (status, _, _) = get(app(index.clone(), RuntimeEnvironment::Production), "/search?page=2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(index.seen.lock().unwrap()[0].query_text, "");
}

#[tokio::test]
async fn test_backend_failure_is_problem_response() {
    let index = Arc::new(FakeIndex {
        failure: Some("connection refused".to_string()),
        ..Default::default()
    });

    let (status, content_type, body) = get(app(index, RuntimeEnvironment::Production), "/search?query=x").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
    let problem: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(problem["title"], "Typesense search failed");
    assert_eq!(problem["status"], 500);
    assert!(problem["detail"].as_str().unwrap().contains("connection refused"));
}

#[tokio::test]
async fn test_similar_titles_failure_is_problem_response() {
    let index = Arc::new(FakeIndex {
        failure: Some("timeout".to_string()),
        ..Default::default()
    });

    let (status, content_type, _) = get(
        app(index, RuntimeEnvironment::Production),
        "/search/similar-titles?query=x",
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));
}

#[tokio::test]
async fn test_alive_and_health() {
    let index = Arc::new(FakeIndex::default());
    let router = app(index, RuntimeEnvironment::Production);

    let (status, _, body) = get(router.clone(), "/alive").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Healthy");

    let (status, _, body) = get(router, "/health").await;
    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_openapi_only_in_development() {
    let (status, _, _) = get(
        app(Arc::new(FakeIndex::default()), RuntimeEnvironment::Production),
        "/openapi/v1.json",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, body) = get(
        app(Arc::new(FakeIndex::default()), RuntimeEnvironment::Development),
        "/openapi/v1.json",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let doc: Value = serde_json::from_slice(&body).unwrap();
    assert!(doc["paths"]["/search"].is_object());
}

//! Backend contract used by the gateway

use async_trait::async_trait;
use qsearch_core::{IndexSchema, SearchDocument, SearchRequest};

use crate::error::Result;

/// Narrow contract to the search backend.
///
/// Implementations absorb transient unavailability themselves; an `Err` from
/// any method is final for that call.
#[async_trait]
pub trait IndexClient: Send + Sync {
    /// Run a search and return documents in backend-ranked order
    async fn search(&self, collection: &str, request: &SearchRequest) -> Result<Vec<SearchDocument>>;

    /// Whether the named collection exists
    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Create a collection from its schema
    async fn create_collection(&self, schema: &IndexSchema) -> Result<()>;
}

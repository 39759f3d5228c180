//! Application state for the API server

use std::sync::Arc;

use qsearch_index::IndexClient;

use crate::service::SearchService;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Search operations over the questions index
    pub search: SearchService,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(index: Arc<dyn IndexClient>) -> Self {
        Self {
            search: SearchService::new(index),
            start_time: std::time::Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#![warn(missing_docs)]

//! qsearch HTTP API
//!
//! Serves full-text search over the `questions` index: a title lookup for
//! similar questions and a general search with inline `[tag]` filtering.
//! Backend failures surface as problem responses, never as crashed requests.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;

pub use server::ApiServer;
pub use service::SearchService;
pub use state::AppState;

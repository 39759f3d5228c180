//! Retrying HTTP transport for qsearch
//!
//! Every call the gateway makes to the search backend goes through this crate,
//! so transient "not ready" answers are absorbed uniformly.
//!
//! ## Features
//!
//! - **Trait-based design**: Mockable via `HttpClientTrait`
//! - **Configurable**: Timeouts, retry budget, default headers
//! - **Retry middleware**: Exponential backoff with jitter on selected statuses
//! - **Testing support**: Exercised against wiremock

pub mod client;
pub mod config;
pub mod error;
pub mod middleware;

pub use client::{read_json, shared_client, HttpClient, HttpClientTrait};
pub use config::HttpConfig;
pub use error::{HttpError, Result};
pub use middleware::{RetryMiddleware, RetryPolicy};

/// Re-export commonly used types
pub use reqwest::{header, Method, Response, StatusCode};

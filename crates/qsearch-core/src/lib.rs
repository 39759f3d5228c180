//! Core search model for qsearch
//!
//! Pure, side-effect free pieces of the gateway:
//!
//! - **`query`**: extracts an inline `[tag]` token from a raw query string
//! - **`request`**: builds the backend search request (fields + filter)
//! - **`document`**: the projected question document returned to callers
//! - **`schema`**: the fixed `questions` collection definition

pub mod document;
pub mod query;
pub mod request;
pub mod schema;

pub use document::SearchDocument;
pub use query::{parse_query, ParsedQuery};
pub use request::{build_search_request, SearchMode, SearchRequest};
pub use schema::{FieldSpec, FieldType, IndexSchema, QUESTIONS_COLLECTION};

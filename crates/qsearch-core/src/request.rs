//! Search request construction

use serde::{Deserialize, Serialize};

use crate::query::ParsedQuery;

/// Which document fields a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Title lookups (similar-title suggestions)
    TitleOnly,
    /// Full search over title and body
    TitleAndContent,
}

impl SearchMode {
    /// Fields searched in this mode, in ranking-priority order
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            SearchMode::TitleOnly => &["title"],
            SearchMode::TitleAndContent => &["title", "content"],
        }
    }
}

/// Structured request handed to the index backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query_text: String,
    pub search_fields: Vec<String>,
    /// Present iff the parsed query carried a tag
    pub filter_expression: Option<String>,
}

impl SearchRequest {
    /// Comma-joined field list (`title,content`)
    pub fn query_by(&self) -> String {
        self.search_fields.join(",")
    }
}

/// Build a search request from a parsed query.
///
/// The tag is substituted into the filter verbatim. Filter syntax characters
/// in the tag are not escaped.
pub fn build_search_request(parsed: &ParsedQuery, mode: SearchMode) -> SearchRequest {
    SearchRequest {
        query_text: parsed.text.clone(),
        search_fields: mode.fields().iter().map(|f| f.to_string()).collect(),
        filter_expression: parsed.tag.as_ref().map(|tag| tag_filter(tag)),
    }
}

fn tag_filter(tag: &str) -> String {
    format!("tags:=[{tag}]")
}

//! Projected question document

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A question as returned to search callers.
///
/// Owned by the index; the gateway only reads and forwards it. Fields the
/// index stores beyond these are dropped by the projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocument {
    /// Question ID
    #[serde(default)]
    pub id: String,
    /// Question title
    pub title: String,
    /// Question body
    #[serde(default)]
    pub content: String,
    /// Tags attached to the question
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time as Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_accepted_answer: Option<bool>,
}

//! Collection schema provisioned at startup

use serde::{Deserialize, Serialize};

/// Name of the collection holding searchable questions
pub const QUESTIONS_COLLECTION: &str = "questions";

/// Index field types, serialized with the backend's type names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "string[]")]
    StringArray,
    #[serde(rename = "int32")]
    Int32,
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "bool")]
    Bool,
}

/// Single field definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub facet: bool,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            facet: false,
        }
    }

    /// Mark the field as filterable/facetable
    pub fn facet(mut self) -> Self {
        self.facet = true;
        self
    }
}

/// Collection definition sent verbatim on create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sorting_field: Option<String>,
}

impl IndexSchema {
    /// The fixed `questions` collection
    pub fn questions() -> Self {
        Self {
            name: QUESTIONS_COLLECTION.to_string(),
            fields: vec![
                FieldSpec::new("id", FieldType::String),
                FieldSpec::new("title", FieldType::String),
                FieldSpec::new("content", FieldType::String),
                FieldSpec::new("tags", FieldType::StringArray).facet(),
                FieldSpec::new("createdAt", FieldType::Int64),
                FieldSpec::new("answerCount", FieldType::Int32),
                FieldSpec::new("hasAcceptedAnswer", FieldType::Bool),
            ],
            default_sorting_field: Some("createdAt".to_string()),
        }
    }
}

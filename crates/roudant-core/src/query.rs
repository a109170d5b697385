//! Mango (`_find`), MapReduce view, and full-text search types.
//!
//! The `Serialize` structs here are posted verbatim as request bodies, so
//! their field names and `skip_serializing_if` rules follow the server's
//! documented JSON shapes exactly.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::options::is_false;

// ---------------------------------------------------------------------------
// Mango queries
// ---------------------------------------------------------------------------

/// Body of a `POST /{db}/_find` (and `_explain`) request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FindOptions {
    pub selector: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    /// Name of an index (`"ddoc"` or `"ddoc/name"`) the planner must use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_index: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub execution_stats: bool,
}

/// One entry of a Mango `sort` array: either a bare field name or a
/// `{"field": "asc"|"desc"}` object.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SortField {
    Field(String),
    Ordered(HashMap<String, SortOrder>),
}

impl SortField {
    pub fn asc(field: impl Into<String>) -> Self {
        SortField::Ordered(HashMap::from([(field.into(), SortOrder::Asc)]))
    }

    pub fn desc(field: impl Into<String>) -> Self {
        SortField::Ordered(HashMap::from([(field.into(), SortOrder::Desc)]))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FindResponse {
    pub docs: Vec<serde_json::Value>,
    #[serde(default)]
    pub bookmark: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
    #[serde(default)]
    pub execution_stats: Option<ExecutionStats>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionStats {
    #[serde(default)]
    pub total_keys_examined: u64,
    #[serde(default)]
    pub total_docs_examined: u64,
    #[serde(default)]
    pub results_returned: u64,
    #[serde(default)]
    pub execution_time_ms: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExplainResponse {
    pub dbname: String,
    pub index: serde_json::Value,
    pub selector: serde_json::Value,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Mango indexes
// ---------------------------------------------------------------------------

/// Body of a `POST /{db}/_index` request.
#[derive(Debug, Clone, Serialize)]
pub struct IndexDefinition {
    pub index: IndexFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ddoc: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub index_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndexFields {
    pub fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_filter_selector: Option<serde_json::Value>,
}

impl IndexDefinition {
    /// A `"json"` index over the given fields.
    pub fn json(fields: &[&str]) -> Self {
        Self {
            index: IndexFields {
                fields: fields.iter().map(|f| f.to_string()).collect(),
                partial_filter_selector: None,
            },
            name: None,
            ddoc: None,
            index_type: Some("json".into()),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexCreateResponse {
    /// `"created"` or `"exists"`.
    pub result: String,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexesResponse {
    #[serde(default)]
    pub total_rows: u64,
    pub indexes: Vec<IndexInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexInfo {
    #[serde(default)]
    pub ddoc: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub index_type: String,
    pub def: serde_json::Value,
}

// ---------------------------------------------------------------------------
// MapReduce views
// ---------------------------------------------------------------------------

/// Body of a `POST /{db}/_design/{ddoc}/_view/{view}` request.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ViewOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_key: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_key: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "is_false")]
    pub descending: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub include_docs: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,
    /// Absent means the server default (reduce when the view has one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce: Option<bool>,
    #[serde(skip_serializing_if = "is_false")]
    pub group: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive_end: Option<bool>,
    /// `"true"`, `"false"`, or `"lazy"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewResponse {
    /// Absent on reduced results.
    #[serde(default)]
    pub total_rows: Option<u64>,
    #[serde(default)]
    pub offset: Option<u64>,
    pub rows: Vec<ViewRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewRow {
    /// Absent on reduced rows.
    #[serde(default)]
    pub id: Option<String>,
    pub key: serde_json::Value,
    pub value: serde_json::Value,
    #[serde(default)]
    pub doc: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Full-text search
// ---------------------------------------------------------------------------

/// Body of a `POST /{db}/_design/{ddoc}/_search/{index}` request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOptions {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "is_false")]
    pub include_docs: bool,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            bookmark: None,
            sort: None,
            counts: None,
            include_docs: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub bookmark: Option<String>,
    pub rows: Vec<SearchRow>,
    #[serde(default)]
    pub counts: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchRow {
    pub id: String,
    #[serde(default)]
    pub order: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub fields: Option<serde_json::Value>,
    #[serde(default)]
    pub doc: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Types for server-managed replication: `_replicator` documents and the
//! `_scheduler` introspection endpoints.

use serde::{Deserialize, Serialize};

use crate::options::is_false;

/// Body of a `_replicator` document. The server picks it up, schedules the
/// job, and tracks its state in `_scheduler`.
#[derive(Debug, Clone, Serialize)]
pub struct ReplicationDocument {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "is_false")]
    pub continuous: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub create_target: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_ids: Option<Vec<String>>,
}

impl ReplicationDocument {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            continuous: false,
            create_target: false,
            selector: None,
            filter: None,
            doc_ids: None,
        }
    }

    pub fn continuous(mut self, yes: bool) -> Self {
        self.continuous = yes;
        self
    }

    pub fn create_target(mut self, yes: bool) -> Self {
        self.create_target = yes;
        self
    }

    pub fn selector(mut self, selector: serde_json::Value) -> Self {
        self.selector = Some(selector);
        self
    }
}

/// Paging parameters for `_scheduler/jobs` and `_scheduler/docs`.
#[derive(Debug, Clone, Default)]
pub struct SchedulerOptions {
    pub limit: Option<u64>,
    pub skip: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerJobsResponse {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub offset: u64,
    pub jobs: Vec<SchedulerJob>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerJob {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
    #[serde(default)]
    pub node: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerDocsResponse {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub offset: u64,
    pub docs: Vec<SchedulerDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerDoc {
    pub id: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
    /// `initializing`, `running`, `completed`, `failed`, `crashing`, ...
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub info: Option<serde_json::Value>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replication_document_body() {
        let doc = ReplicationDocument::new("http://localhost:5984/a", "http://localhost:5984/b")
            .create_target(true);
        let body = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "source": "http://localhost:5984/a",
                "target": "http://localhost:5984/b",
                "create_target": true
            })
        );
    }

    #[test]
    fn scheduler_doc_parses_loose_fields() {
        let doc: SchedulerDoc = serde_json::from_value(serde_json::json!({
            "id": "repl1",
            "database": "_replicator",
            "doc_id": "repl1",
            "state": "completed",
            "start_time": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(doc.state.as_deref(), Some("completed"));
        assert!(doc.extra.contains_key("start_time"));
    }
}

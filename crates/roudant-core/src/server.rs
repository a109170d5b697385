//! Server and cluster introspection responses.

use serde::Deserialize;

/// Response of `GET /` — the server welcome message.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfo {
    pub couchdb: String,
    pub version: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub vendor: Option<serde_json::Value>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UuidsResponse {
    pub uuids: Vec<String>,
}

/// Response of `GET /_membership`.
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipInfo {
    pub all_nodes: Vec<String>,
    pub cluster_nodes: Vec<String>,
}

/// Response of `GET /_up`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpInfo {
    pub status: String,
}

/// One entry of `GET /_active_tasks`. Task shapes vary by type, so only the
/// common fields are typed.
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveTask {
    #[serde(rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub progress: Option<u32>,
    #[serde(default)]
    pub started_on: Option<u64>,
    #[serde(default)]
    pub updated_on: Option<u64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_info_parses_welcome() {
        let info: ServerInfo = serde_json::from_value(serde_json::json!({
            "couchdb": "Welcome",
            "version": "3.3.3",
            "vendor": {"name": "The Apache Software Foundation"},
            "features": ["access-ready", "partitioned"]
        }))
        .unwrap();
        assert_eq!(info.couchdb, "Welcome");
        assert_eq!(info.version, "3.3.3");
        assert_eq!(info.features.len(), 2);
    }

    #[test]
    fn active_task_keeps_unknown_fields() {
        let task: ActiveTask = serde_json::from_value(serde_json::json!({
            "type": "indexer",
            "database": "shards/00000000-ffffffff/people",
            "progress": 70,
            "design_document": "_design/people"
        }))
        .unwrap();
        assert_eq!(task.task_type, "indexer");
        assert_eq!(task.progress, Some(70));
        assert!(task.extra.contains_key("design_document"));
    }
}

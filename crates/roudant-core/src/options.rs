//! Option structs and response types shared across the client's
//! database/document/bulk/changes surface.

use serde::{Deserialize, Serialize};

/// Serde helper for `skip_serializing_if` on plain bool flags.
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

// ---------------------------------------------------------------------------
// Generic responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// Database operations
// ---------------------------------------------------------------------------

/// Parameters for `PUT /{db}`.
#[derive(Debug, Clone, Default)]
pub struct DatabaseCreateOptions {
    /// Create a partitioned database.
    pub partitioned: bool,
    /// Number of shards.
    pub q: Option<u32>,
    /// Number of replicas of each shard.
    pub n: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbInfo {
    pub db_name: String,
    pub doc_count: u64,
    #[serde(default)]
    pub doc_del_count: u64,
    pub update_seq: Seq,
    #[serde(default)]
    pub purge_seq: Option<serde_json::Value>,
    #[serde(default)]
    pub sizes: Option<serde_json::Value>,
    #[serde(default)]
    pub props: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Document operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct GetDocumentOptions {
    /// Retrieve a specific revision.
    pub rev: Option<String>,
    /// Include conflicting revisions in `_conflicts`.
    pub conflicts: bool,
    /// Include deleted conflict revisions.
    pub deleted_conflicts: bool,
    /// Include full revision history.
    pub revs: bool,
    /// Force retrieval of the latest leaf revision.
    pub latest: bool,
    /// Inline attachment bodies as base64.
    pub attachments: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GetAttachmentOptions {
    pub rev: Option<String>,
}

// ---------------------------------------------------------------------------
// Bulk operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct BulkDocsOptions {
    /// When false (replication), accept revisions as-is.
    /// When true (default), generate new revisions and check conflicts.
    pub new_edits: bool,
}

impl BulkDocsOptions {
    pub fn new() -> Self {
        Self { new_edits: true }
    }

    pub fn replication() -> Self {
        Self { new_edits: false }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllDocsOptions {
    pub start_key: Option<String>,
    pub end_key: Option<String>,
    pub key: Option<String>,
    pub keys: Option<Vec<String>>,
    pub include_docs: bool,
    pub descending: bool,
    pub skip: u64,
    pub limit: Option<u64>,
    pub inclusive_end: bool,
}

impl AllDocsOptions {
    pub fn new() -> Self {
        Self {
            inclusive_end: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllDocsRow {
    pub id: String,
    pub key: String,
    pub value: AllDocsRowValue,
    #[serde(default)]
    pub doc: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllDocsRowValue {
    pub rev: String,
    #[serde(default)]
    pub deleted: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AllDocsResponse {
    #[serde(default)]
    pub total_rows: u64,
    #[serde(default)]
    pub offset: u64,
    pub rows: Vec<AllDocsRow>,
}

// ---------------------------------------------------------------------------
// Bulk get
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkGetItem {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
}

impl BulkGetItem {
    pub fn latest(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rev: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkGetResponse {
    pub results: Vec<BulkGetResult>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkGetResult {
    pub id: String,
    pub docs: Vec<BulkGetDoc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkGetDoc {
    #[serde(default)]
    pub ok: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<BulkGetError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkGetError {
    pub id: String,
    #[serde(default)]
    pub rev: String,
    pub error: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Changes feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct ChangesOptions {
    pub since: Seq,
    pub limit: Option<u64>,
    pub descending: bool,
    pub include_docs: bool,
    /// When set, only changes for these ids are returned (`_doc_ids` filter).
    pub doc_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeEvent {
    pub seq: Seq,
    pub id: String,
    pub changes: Vec<ChangeRev>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub doc: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeRev {
    pub rev: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangesResponse {
    pub results: Vec<ChangeEvent>,
    pub last_seq: Seq,
}

// ---------------------------------------------------------------------------
// Sequence type — supports both numeric and opaque string (CouchDB 3.x)
// ---------------------------------------------------------------------------

/// A database sequence identifier.
///
/// CouchDB 3.x uses opaque string sequences that must be passed back as-is;
/// older servers and `doc_count`-style endpoints use plain numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seq {
    Num(u64),
    Str(String),
}

impl Seq {
    /// The zero sequence (start from the beginning).
    pub fn zero() -> Self {
        Seq::Num(0)
    }

    /// Format for use in HTTP query parameters.
    pub fn to_query_string(&self) -> String {
        match self {
            Seq::Num(n) => n.to_string(),
            Seq::Str(s) => s.clone(),
        }
    }
}

impl Default for Seq {
    fn default() -> Self {
        Seq::Num(0)
    }
}

impl From<u64> for Seq {
    fn from(n: u64) -> Self {
        Seq::Num(n)
    }
}

impl std::fmt::Display for Seq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seq::Num(n) => write!(f, "{}", n),
            Seq::Str(s) => write!(f, "{}", s),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

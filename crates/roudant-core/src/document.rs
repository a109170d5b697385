use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Revision
// ---------------------------------------------------------------------------

/// A CouchDB revision identifier: `{pos}-{hash}`.
///
/// - `pos` is the generation number (starts at 1, increments each edit).
/// - `hash` is a 32-character hex digest minted by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revision {
    pub pos: u64,
    pub hash: String,
}

impl Revision {
    pub fn new(pos: u64, hash: String) -> Self {
        Self { pos, hash }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pos, self.hash)
    }
}

impl FromStr for Revision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (pos_str, hash) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidRev(s.to_string()))?;
        let pos: u64 = pos_str
            .parse()
            .map_err(|_| Error::InvalidRev(s.to_string()))?;
        Ok(Revision {
            pos,
            hash: hash.to_string(),
        })
    }
}

impl Ord for Revision {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.pos
            .cmp(&other.pos)
            .then_with(|| self.hash.cmp(&other.hash))
    }
}

impl PartialOrd for Revision {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// AttachmentMeta
// ---------------------------------------------------------------------------

/// Attachment metadata as it appears inline under `_attachments`.
///
/// `data` is the base64-encoded body, present only when the document was
/// fetched with `attachments: true`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttachmentMeta {
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub length: Option<u64>,
    #[serde(default)]
    pub revpos: Option<u64>,
    #[serde(default)]
    pub stub: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A CouchDB-compatible document as returned by the server.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub rev: Option<Revision>,
    pub deleted: bool,
    pub data: serde_json::Value,
    pub attachments: HashMap<String, AttachmentMeta>,
    /// Conflicting leaf revisions, present when fetched with `conflicts: true`.
    pub conflicts: Vec<String>,
}

impl Document {
    /// Create a document from a JSON value.
    ///
    /// Extracts `_id`, `_rev`, `_deleted`, `_attachments`, and `_conflicts`
    /// from the value and puts the remaining fields in `data`.
    pub fn from_json(mut value: serde_json::Value) -> Result<Self> {
        let obj = value
            .as_object_mut()
            .ok_or_else(|| Error::BadRequest("document must be a JSON object".into()))?;

        let id = obj
            .remove("_id")
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();

        let rev = obj
            .remove("_rev")
            .and_then(|v| v.as_str().map(String::from))
            .map(|s| s.parse::<Revision>())
            .transpose()?;

        let deleted = obj
            .remove("_deleted")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);

        let attachments: HashMap<String, AttachmentMeta> = obj
            .remove("_attachments")
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default();

        let conflicts: Vec<String> = obj
            .remove("_conflicts")
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default();

        Ok(Document {
            id,
            rev,
            deleted,
            data: value,
            attachments,
            conflicts,
        })
    }

    /// Convert back to a JSON value with CouchDB underscore fields.
    pub fn to_json(&self) -> serde_json::Value {
        let mut obj = match &self.data {
            serde_json::Value::Object(m) => m.clone(),
            _ => serde_json::Map::new(),
        };

        obj.insert("_id".into(), serde_json::Value::String(self.id.clone()));

        if let Some(rev) = &self.rev {
            obj.insert("_rev".into(), serde_json::Value::String(rev.to_string()));
        }

        if self.deleted {
            obj.insert("_deleted".into(), serde_json::Value::Bool(true));
        }

        if !self.attachments.is_empty()
            && let Ok(value) = serde_json::to_value(&self.attachments)
        {
            obj.insert("_attachments".into(), value);
        }

        serde_json::Value::Object(obj)
    }
}

// ---------------------------------------------------------------------------
// Write responses
// ---------------------------------------------------------------------------

/// Response to a single-document write (`PUT`/`POST`/`DELETE`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutResponse {
    pub ok: bool,
    pub id: String,
    pub rev: String,
}

/// Per-document outcome of a `_bulk_docs` request. Successful entries carry
/// `ok`/`rev`; rejected entries carry `error`/`reason` instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResult {
    #[serde(default)]
    pub ok: bool,
    pub id: String,
    #[serde(default)]
    pub rev: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl DocumentResult {
    /// Whether the server accepted this document.
    pub fn accepted(&self) -> bool {
        self.error.is_none() && self.rev.is_some()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Core types for the roudant CouchDB/Cloudant client.
//!
//! Everything the wire protocol speaks lives here: revisions, documents,
//! the option structs that parameterize each operation, the typed response
//! shapes, and the error taxonomy mapped from HTTP statuses. The client
//! itself (the `roudant` crate) holds the transport.

pub mod document;
pub mod error;
pub mod options;
pub mod query;
pub mod replication;
pub mod security;
pub mod server;

pub use document::{AttachmentMeta, Document, DocumentResult, PutResponse, Revision};
pub use error::{Error, Result};
pub use options::{
    AllDocsOptions, AllDocsResponse, BulkDocsOptions, BulkGetItem, BulkGetResponse,
    ChangesOptions, ChangesResponse, DatabaseCreateOptions, DbInfo, GetAttachmentOptions,
    GetDocumentOptions, OkResponse, Seq,
};
pub use query::{
    FindOptions, FindResponse, IndexDefinition, SearchOptions, SearchResponse, SortField,
    ViewOptions, ViewResponse,
};
pub use replication::{ReplicationDocument, SchedulerOptions};
pub use security::{SecurityDocument, SecurityMembers, SessionResponse};
pub use server::ServerInfo;

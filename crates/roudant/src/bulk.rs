//! Bulk document operations: `_bulk_docs`, `_bulk_get`, `_all_docs`.

use reqwest::Method;

use roudant_core::document::DocumentResult;
use roudant_core::error::Result;
use roudant_core::options::{
    AllDocsOptions, AllDocsResponse, BulkDocsOptions, BulkGetItem, BulkGetResponse,
};

use crate::client::Client;

impl Client {
    /// `POST /{db}/_bulk_docs` — write many documents in one request.
    ///
    /// With `BulkDocsOptions::replication()` the server accepts the given
    /// `_rev`s as-is instead of generating new ones.
    pub async fn bulk_docs(
        &self,
        db: &str,
        docs: Vec<serde_json::Value>,
        opts: BulkDocsOptions,
    ) -> Result<Vec<DocumentResult>> {
        let mut body = serde_json::json!({ "docs": docs });
        if !opts.new_edits {
            body["new_edits"] = serde_json::Value::Bool(false);
        }
        self.json(
            self.request(Method::POST, &self.url(&[db, "_bulk_docs"]))
                .json(&body),
        )
        .await
    }

    /// `POST /{db}/_bulk_get` — fetch many documents (optionally at specific
    /// revisions) in one request.
    pub async fn bulk_get(&self, db: &str, items: Vec<BulkGetItem>) -> Result<BulkGetResponse> {
        let body = serde_json::json!({ "docs": items });
        self.json(
            self.request(Method::POST, &self.url(&[db, "_bulk_get"]))
                .json(&body),
        )
        .await
    }

    /// `GET /{db}/_all_docs` (or `POST` when `keys` is set) — list documents
    /// by id.
    pub async fn all_docs(&self, db: &str, opts: AllDocsOptions) -> Result<AllDocsResponse> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if opts.include_docs {
            pairs.push(("include_docs", "true".into()));
        }
        if opts.descending {
            pairs.push(("descending", "true".into()));
        }
        if !opts.inclusive_end {
            pairs.push(("inclusive_end", "false".into()));
        }
        if opts.skip > 0 {
            pairs.push(("skip", opts.skip.to_string()));
        }
        if let Some(limit) = opts.limit {
            pairs.push(("limit", limit.to_string()));
        }
        // Key-valued parameters are JSON in the query string, so strings
        // must keep their quotes.
        if let Some(key) = &opts.key {
            pairs.push(("key", serde_json::to_string(key)?));
        }
        if let Some(start_key) = &opts.start_key {
            pairs.push(("start_key", serde_json::to_string(start_key)?));
        }
        if let Some(end_key) = &opts.end_key {
            pairs.push(("end_key", serde_json::to_string(end_key)?));
        }

        let url = self.url(&[db, "_all_docs"]);
        let req = match &opts.keys {
            Some(keys) => self
                .request(Method::POST, &url)
                .query(&pairs)
                .json(&serde_json::json!({ "keys": keys })),
            None => self.request(Method::GET, &url).query(&pairs),
        };
        self.json(req).await
    }
}

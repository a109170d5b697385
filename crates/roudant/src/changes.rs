//! The changes feed.

use reqwest::Method;

use roudant_core::error::Result;
use roudant_core::options::{ChangesOptions, ChangesResponse};

use crate::client::Client;

impl Client {
    /// `GET /{db}/_changes` — one-shot changes since a sequence.
    ///
    /// When `doc_ids` is set the request switches to `POST` with the
    /// `_doc_ids` filter, since long id lists don't fit a query string.
    pub async fn changes(&self, db: &str, opts: ChangesOptions) -> Result<ChangesResponse> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        pairs.push(("since", opts.since.to_query_string()));
        if let Some(limit) = opts.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if opts.descending {
            pairs.push(("descending", "true".into()));
        }
        if opts.include_docs {
            pairs.push(("include_docs", "true".into()));
        }

        let url = self.url(&[db, "_changes"]);
        let req = match &opts.doc_ids {
            Some(doc_ids) => {
                pairs.push(("filter", "_doc_ids".into()));
                self.request(Method::POST, &url)
                    .query(&pairs)
                    .json(&serde_json::json!({ "doc_ids": doc_ids }))
            }
            None => self.request(Method::GET, &url).query(&pairs),
        };
        self.json(req).await
    }
}

//! Design documents, MapReduce view queries, and full-text search.

use reqwest::Method;

use roudant_core::document::{Document, PutResponse};
use roudant_core::error::Result;
use roudant_core::query::{SearchOptions, SearchResponse, ViewOptions, ViewResponse};

use crate::client::Client;

impl Client {
    /// `PUT /{db}/_design/{ddoc}` — create or update a design document.
    ///
    /// Pass the current `_rev` inside `body` when updating.
    pub async fn put_design_document(
        &self,
        db: &str,
        ddoc: &str,
        body: serde_json::Value,
    ) -> Result<PutResponse> {
        self.json(
            self.request(Method::PUT, &self.url(&[db, "_design", ddoc]))
                .json(&body),
        )
        .await
    }

    /// `GET /{db}/_design/{ddoc}` — fetch a design document.
    pub async fn get_design_document(&self, db: &str, ddoc: &str) -> Result<Document> {
        let value: serde_json::Value = self
            .json(self.request(Method::GET, &self.url(&[db, "_design", ddoc])))
            .await?;
        Document::from_json(value)
    }

    /// `DELETE /{db}/_design/{ddoc}?rev=` — delete a design document.
    pub async fn delete_design_document(
        &self,
        db: &str,
        ddoc: &str,
        rev: &str,
    ) -> Result<PutResponse> {
        self.json(
            self.request(Method::DELETE, &self.url(&[db, "_design", ddoc]))
                .query(&[("rev", rev)]),
        )
        .await
    }

    /// `POST /{db}/_design/{ddoc}/_view/{view}` — query a MapReduce view.
    pub async fn view(
        &self,
        db: &str,
        ddoc: &str,
        view: &str,
        opts: &ViewOptions,
    ) -> Result<ViewResponse> {
        self.json(
            self.request(Method::POST, &self.url(&[db, "_design", ddoc, "_view", view]))
                .json(opts),
        )
        .await
    }

    /// `POST /{db}/_design/{ddoc}/_search/{index}` — query a full-text
    /// search index (requires a server with search enabled).
    pub async fn search(
        &self,
        db: &str,
        ddoc: &str,
        index: &str,
        opts: &SearchOptions,
    ) -> Result<SearchResponse> {
        self.json(
            self.request(
                Method::POST,
                &self.url(&[db, "_design", ddoc, "_search", index]),
            )
            .json(opts),
        )
        .await
    }
}

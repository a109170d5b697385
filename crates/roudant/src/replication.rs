//! Replication management through `_replicator` documents and the
//! `_scheduler` endpoints.

use reqwest::Method;

use roudant_core::document::{Document, PutResponse};
use roudant_core::error::Result;
use roudant_core::replication::{
    ReplicationDocument, SchedulerDoc, SchedulerDocsResponse, SchedulerJobsResponse,
    SchedulerOptions,
};

use crate::client::Client;

impl Client {
    /// `PUT /_replicator/{id}` — schedule a replication.
    pub async fn replicate(&self, id: &str, doc: &ReplicationDocument) -> Result<PutResponse> {
        self.json(
            self.request(Method::PUT, &self.doc_url("_replicator", id))
                .json(doc),
        )
        .await
    }

    /// `GET /_replicator/{id}` — the replication document, including the
    /// server-added `_replication_state` fields.
    pub async fn replication_document(&self, id: &str) -> Result<Document> {
        let value: serde_json::Value = self
            .json(self.request(Method::GET, &self.doc_url("_replicator", id)))
            .await?;
        Document::from_json(value)
    }

    /// Cancel a replication by deleting its `_replicator` document.
    pub async fn cancel_replication(&self, id: &str) -> Result<PutResponse> {
        let rev = self.document_rev("_replicator", id).await?;
        self.json(
            self.request(Method::DELETE, &self.doc_url("_replicator", id))
                .query(&[("rev", rev)]),
        )
        .await
    }

    /// `GET /_scheduler/jobs` — currently running replication jobs.
    pub async fn scheduler_jobs(&self, opts: SchedulerOptions) -> Result<SchedulerJobsResponse> {
        let req = self
            .request(Method::GET, &self.url(&["_scheduler", "jobs"]))
            .query(&scheduler_pairs(&opts));
        self.json(req).await
    }

    /// `GET /_scheduler/docs` — state of all `_replicator` documents.
    pub async fn scheduler_docs(&self, opts: SchedulerOptions) -> Result<SchedulerDocsResponse> {
        let req = self
            .request(Method::GET, &self.url(&["_scheduler", "docs"]))
            .query(&scheduler_pairs(&opts));
        self.json(req).await
    }

    /// `GET /_scheduler/docs/_replicator/{id}` — state of one replication.
    pub async fn scheduler_document(&self, id: &str) -> Result<SchedulerDoc> {
        self.json(self.request(
            Method::GET,
            &self.url(&["_scheduler", "docs", "_replicator", id]),
        ))
        .await
    }
}

fn scheduler_pairs(opts: &SchedulerOptions) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(limit) = opts.limit {
        pairs.push(("limit", limit.to_string()));
    }
    if let Some(skip) = opts.skip {
        pairs.push(("skip", skip.to_string()));
    }
    pairs
}

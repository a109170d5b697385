//! Single-document CRUD and the concurrent multi-fetch helper.

use reqwest::Method;

use roudant_core::document::{Document, PutResponse};
use roudant_core::error::{Error, Result};
use roudant_core::options::GetDocumentOptions;

use crate::client::Client;
use crate::fanout::fan_out;

impl Client {
    /// `GET /{db}/{id}` — fetch a document.
    pub async fn get_document(
        &self,
        db: &str,
        id: &str,
        opts: GetDocumentOptions,
    ) -> Result<Document> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(rev) = &opts.rev {
            pairs.push(("rev", rev.clone()));
        }
        if opts.conflicts {
            pairs.push(("conflicts", "true".into()));
        }
        if opts.deleted_conflicts {
            pairs.push(("deleted_conflicts", "true".into()));
        }
        if opts.revs {
            pairs.push(("revs", "true".into()));
        }
        if opts.latest {
            pairs.push(("latest", "true".into()));
        }
        if opts.attachments {
            pairs.push(("attachments", "true".into()));
        }
        let value: serde_json::Value = self
            .json(
                self.request(Method::GET, &self.doc_url(db, id))
                    .query(&pairs),
            )
            .await?;
        Document::from_json(value)
    }

    /// `HEAD /{db}/{id}` — current revision from the `ETag` header.
    pub async fn document_rev(&self, db: &str, id: &str) -> Result<String> {
        let resp = self
            .send(self.request(Method::HEAD, &self.doc_url(db, id)))
            .await?;
        let etag = resp
            .headers()
            .get(reqwest::header::ETAG)
            .and_then(|v| v.to_str().ok())
            .ok_or(Error::MissingRev)?;
        Ok(etag.trim_matches('"').to_string())
    }

    /// `HEAD /{db}/{id}` — whether a document exists.
    pub async fn document_exists(&self, db: &str, id: &str) -> Result<bool> {
        match self.document_rev(db, id).await {
            Ok(_) => Ok(true),
            Err(Error::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// `PUT /{db}/{id}` — create a document with a chosen id.
    pub async fn put_document(
        &self,
        db: &str,
        id: &str,
        body: serde_json::Value,
    ) -> Result<PutResponse> {
        self.json(self.request(Method::PUT, &self.doc_url(db, id)).json(&body))
            .await
    }

    /// `PUT /{db}/{id}?rev=` — update an existing document.
    pub async fn update_document(
        &self,
        db: &str,
        id: &str,
        rev: &str,
        body: serde_json::Value,
    ) -> Result<PutResponse> {
        self.json(
            self.request(Method::PUT, &self.doc_url(db, id))
                .query(&[("rev", rev)])
                .json(&body),
        )
        .await
    }

    /// `POST /{db}` — create a document with a server-assigned id.
    pub async fn create_document(
        &self,
        db: &str,
        body: serde_json::Value,
    ) -> Result<PutResponse> {
        self.json(self.request(Method::POST, &self.url(&[db])).json(&body))
            .await
    }

    /// `DELETE /{db}/{id}?rev=` — delete a document.
    pub async fn delete_document(&self, db: &str, id: &str, rev: &str) -> Result<PutResponse> {
        self.json(
            self.request(Method::DELETE, &self.doc_url(db, id))
                .query(&[("rev", rev)]),
        )
        .await
    }

    /// Fetch many documents concurrently, one request per id.
    ///
    /// Results come back in arbitrary order, each paired with the id it was
    /// fetched for. A missing document yields `Err(Error::NotFound)` for its
    /// id without affecting the others.
    pub async fn get_document_many(
        &self,
        db: &str,
        ids: &[String],
    ) -> Vec<(String, Result<Document>)> {
        let inputs: Vec<(Client, String, String)> = ids
            .iter()
            .map(|id| (self.clone(), db.to_string(), id.clone()))
            .collect();
        fan_out(inputs, |(client, db, id)| async move {
            let doc = client
                .get_document(&db, &id, GetDocumentOptions::default())
                .await;
            (id, doc)
        })
        .await
    }
}

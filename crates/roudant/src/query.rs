//! Mango queries and index management.

use reqwest::Method;

use roudant_core::error::Result;
use roudant_core::options::OkResponse;
use roudant_core::query::{
    ExplainResponse, FindOptions, FindResponse, IndexCreateResponse, IndexDefinition,
    IndexesResponse,
};

use crate::client::Client;

impl Client {
    /// `POST /{db}/_find` — run a Mango selector query.
    pub async fn find(&self, db: &str, opts: &FindOptions) -> Result<FindResponse> {
        self.json(
            self.request(Method::POST, &self.url(&[db, "_find"]))
                .json(opts),
        )
        .await
    }

    /// `POST /{db}/_explain` — show which index the planner would use for a
    /// query, without running it.
    pub async fn explain(&self, db: &str, opts: &FindOptions) -> Result<ExplainResponse> {
        self.json(
            self.request(Method::POST, &self.url(&[db, "_explain"]))
                .json(opts),
        )
        .await
    }

    /// `POST /{db}/_index` — create a Mango index.
    pub async fn create_index(
        &self,
        db: &str,
        definition: &IndexDefinition,
    ) -> Result<IndexCreateResponse> {
        self.json(
            self.request(Method::POST, &self.url(&[db, "_index"]))
                .json(definition),
        )
        .await
    }

    /// `GET /{db}/_index` — list all indexes on a database.
    pub async fn list_indexes(&self, db: &str) -> Result<IndexesResponse> {
        self.json(self.request(Method::GET, &self.url(&[db, "_index"])))
            .await
    }

    /// `DELETE /{db}/_index/{ddoc}/json/{name}` — delete a Mango index.
    pub async fn delete_index(&self, db: &str, ddoc: &str, name: &str) -> Result<OkResponse> {
        self.json(self.request(
            Method::DELETE,
            &self.url(&[db, "_index", ddoc, "json", name]),
        ))
        .await
    }
}

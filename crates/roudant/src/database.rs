//! Database-level operations.

use reqwest::Method;

use roudant_core::error::{Error, Result};
use roudant_core::options::{DatabaseCreateOptions, DbInfo, OkResponse};

use crate::client::Client;

impl Client {
    /// `PUT /{db}` — create a database.
    ///
    /// Fails with [`Error::PreconditionFailed`] when the database already
    /// exists.
    pub async fn create_database(
        &self,
        name: &str,
        opts: DatabaseCreateOptions,
    ) -> Result<OkResponse> {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if opts.partitioned {
            pairs.push(("partitioned", "true".into()));
        }
        if let Some(q) = opts.q {
            pairs.push(("q", q.to_string()));
        }
        if let Some(n) = opts.n {
            pairs.push(("n", n.to_string()));
        }
        self.json(self.request(Method::PUT, &self.url(&[name])).query(&pairs))
            .await
    }

    /// `DELETE /{db}` — delete a database and all its documents.
    pub async fn delete_database(&self, name: &str) -> Result<OkResponse> {
        self.json(self.request(Method::DELETE, &self.url(&[name])))
            .await
    }

    /// `HEAD /{db}` — whether a database exists.
    pub async fn database_exists(&self, name: &str) -> Result<bool> {
        let resp = self
            .request(Method::HEAD, &self.url(&[name]))
            .send()
            .await
            .map_err(Error::transport)?;
        match resp.status().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            status => Err(Error::from_status(status, "", "")),
        }
    }

    /// `GET /{db}` — database metadata (document count, update seq, sizes).
    pub async fn database_info(&self, name: &str) -> Result<DbInfo> {
        self.json(self.request(Method::GET, &self.url(&[name])))
            .await
    }
}

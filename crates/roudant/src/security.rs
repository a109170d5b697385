//! Database security objects.

use reqwest::Method;

use roudant_core::error::Result;
use roudant_core::options::OkResponse;
use roudant_core::security::SecurityDocument;

use crate::client::Client;

impl Client {
    /// `GET /{db}/_security` — the database's security object.
    pub async fn security(&self, db: &str) -> Result<SecurityDocument> {
        self.json(self.request(Method::GET, &self.url(&[db, "_security"])))
            .await
    }

    /// `PUT /{db}/_security` — replace the database's security object.
    pub async fn put_security(&self, db: &str, doc: &SecurityDocument) -> Result<OkResponse> {
        self.json(
            self.request(Method::PUT, &self.url(&[db, "_security"]))
                .json(doc),
        )
        .await
    }
}

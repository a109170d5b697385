//! Document attachments.

use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

use roudant_core::document::PutResponse;
use roudant_core::error::{Error, Result};
use roudant_core::options::GetAttachmentOptions;

use crate::client::{Client, encode_segment};

impl Client {
    fn attachment_url(&self, db: &str, id: &str, name: &str) -> String {
        format!("{}/{}", self.doc_url(db, id), encode_segment(name))
    }

    /// `GET /{db}/{id}/{attachment}` — raw attachment bytes.
    pub async fn get_attachment(
        &self,
        db: &str,
        id: &str,
        name: &str,
        opts: GetAttachmentOptions,
    ) -> Result<Vec<u8>> {
        let mut req = self.request(Method::GET, &self.attachment_url(db, id, name));
        if let Some(rev) = &opts.rev {
            req = req.query(&[("rev", rev)]);
        }
        let resp = self.send(req).await?;
        let bytes = resp.bytes().await.map_err(Error::transport)?;
        Ok(bytes.to_vec())
    }

    /// `PUT /{db}/{id}/{attachment}?rev=` — upload an attachment.
    pub async fn put_attachment(
        &self,
        db: &str,
        id: &str,
        name: &str,
        rev: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<PutResponse> {
        self.json(
            self.request(Method::PUT, &self.attachment_url(db, id, name))
                .query(&[("rev", rev)])
                .header(CONTENT_TYPE, content_type)
                .body(data),
        )
        .await
    }

    /// `DELETE /{db}/{id}/{attachment}?rev=` — remove an attachment.
    pub async fn delete_attachment(
        &self,
        db: &str,
        id: &str,
        name: &str,
        rev: &str,
    ) -> Result<PutResponse> {
        self.json(
            self.request(Method::DELETE, &self.attachment_url(db, id, name))
                .query(&[("rev", rev)]),
        )
        .await
    }
}

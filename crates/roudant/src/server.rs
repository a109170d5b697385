//! Server and cluster introspection endpoints.

use reqwest::Method;

use roudant_core::error::Result;
use roudant_core::security::SessionResponse;
use roudant_core::server::{ActiveTask, MembershipInfo, ServerInfo, UpInfo, UuidsResponse};

use crate::client::Client;

impl Client {
    /// `GET /` — server welcome message and version.
    pub async fn server_info(&self) -> Result<ServerInfo> {
        self.json(self.request(Method::GET, &self.url(&[]))).await
    }

    /// `GET /_uuids` — server-generated UUIDs.
    pub async fn uuids(&self, count: usize) -> Result<Vec<String>> {
        let req = self
            .request(Method::GET, &self.url(&["_uuids"]))
            .query(&[("count", count.to_string())]);
        let resp: UuidsResponse = self.json(req).await?;
        Ok(resp.uuids)
    }

    /// `GET /_all_dbs` — names of all databases on the server.
    pub async fn all_dbs(&self) -> Result<Vec<String>> {
        self.json(self.request(Method::GET, &self.url(&["_all_dbs"])))
            .await
    }

    /// `GET /_active_tasks` — running tasks (indexers, compaction,
    /// replications).
    pub async fn active_tasks(&self) -> Result<Vec<ActiveTask>> {
        self.json(self.request(Method::GET, &self.url(&["_active_tasks"])))
            .await
    }

    /// `GET /_membership` — cluster node membership.
    pub async fn membership(&self) -> Result<MembershipInfo> {
        self.json(self.request(Method::GET, &self.url(&["_membership"])))
            .await
    }

    /// `GET /_up` — liveness check.
    pub async fn up(&self) -> Result<UpInfo> {
        self.json(self.request(Method::GET, &self.url(&["_up"])))
            .await
    }

    /// `GET /_session` — the authenticated user context.
    pub async fn session(&self) -> Result<SessionResponse> {
        self.json(self.request(Method::GET, &self.url(&["_session"])))
            .await
    }
}

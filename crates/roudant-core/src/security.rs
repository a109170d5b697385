//! `_security` objects and `_session` responses.

use serde::{Deserialize, Serialize};

/// A database `_security` object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityDocument {
    #[serde(default)]
    pub admins: SecurityMembers,
    #[serde(default)]
    pub members: SecurityMembers,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityMembers {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl SecurityMembers {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.roles.is_empty()
    }
}

/// Response of `GET /_session`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub ok: bool,
    #[serde(rename = "userCtx")]
    pub user_ctx: UserContext,
    #[serde(default)]
    pub info: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserContext {
    /// `None` for the anonymous user.
    pub name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

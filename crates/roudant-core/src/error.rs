use thiserror::Error;

/// All errors that roudant can produce.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: document update conflict")]
    Conflict,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("invalid revision format: {0}")]
    InvalidRev(String),

    #[error("missing document revision")]
    MissingRev,

    #[error("unexpected status {status}: {error}: {reason}")]
    Unexpected {
        status: u16,
        error: String,
        reason: String,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap any transport-level failure (connection, timeout, body decode).
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Error::Transport(err.to_string())
    }

    /// Map a non-2xx status and the parsed `{"error", "reason"}` body to a
    /// typed error.
    pub fn from_status(status: u16, error: impl Into<String>, reason: impl Into<String>) -> Self {
        let error = error.into();
        let reason = reason.into();
        match status {
            400 => Error::BadRequest(reason),
            401 => Error::Unauthorized,
            403 => Error::Forbidden(reason),
            404 => Error::NotFound(reason),
            409 => Error::Conflict,
            412 => Error::PreconditionFailed(reason),
            _ => Error::Unexpected {
                status,
                error,
                reason,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

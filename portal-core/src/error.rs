use thiserror::Error;

/// Problems building an in-memory [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("display name must not be empty")]
    EmptyDisplayName,
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Failures talking to the cookie jar.
///
/// These never escape the [`SessionStore`](crate::SessionStore): a failed write degrades
/// to memory-only behaviour and is logged.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cookie storage is unavailable")]
    Unavailable,
    #[error("cookie write rejected: {0}")]
    Write(String),
    #[error("session record could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A push/replace the host refused (sandboxed iframes, `file://` origins, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("history update to {path} rejected: {reason}")]
    Rejected { path: String, reason: String },
}

/// Errors surfaced by controller operations.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Session(#[from] SessionError),
}

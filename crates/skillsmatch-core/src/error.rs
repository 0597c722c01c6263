//! Client-level error types.

use thiserror::Error;

/// Errors produced by the authenticated request client and everything built on it.
///
/// HTTP failures keep their status code so callers can tell an expired session
/// apart from other rejections without looking at the message text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// HTTP status of the rejected request, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the bearer token (401 or 403).
    pub fn is_session_expired(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Session storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Session storage is unavailable")]
    Unavailable,

    #[error("Session storage I/O failed: {0}")]
    Io(String),

    #[error("Session storage is corrupt: {0}")]
    Corrupt(String),
}

//! View-level errors and the translation from client failures.

use thiserror::Error;
use tracing::{info, warn};

use skillsmatch_core::{ApiError, StorageError};
use skillsmatch_infra::SessionStore;

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// What a view reports to the user when an action cannot complete.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{}", SESSION_EXPIRED_MESSAGE)]
    SessionExpired,

    #[error("You need to log in first.")]
    NotLoggedIn,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Api(ApiError),

    #[error("Could not update the local session: {0}")]
    Storage(#[from] StorageError),
}

/// Result type alias for views.
pub type ViewResult<T> = Result<T, ViewError>;

/// Translate a failed call made with the session's token.
///
/// A 401/403 means the backend no longer accepts the token: the local
/// session is cleared and the caller gets [`ViewError::SessionExpired`].
/// Without a session there is nothing to expire and the error passes through.
pub fn session_failure(session: &SessionStore, err: ApiError) -> ViewError {
    if !err.is_session_expired() || !session.is_logged_in() {
        return ViewError::Api(err);
    }

    if let Err(e) = session.clear() {
        warn!(error = %e, "Failed to clear rejected session");
    }
    info!(status = ?err.status(), "Backend rejected the session token; session cleared");
    ViewError::SessionExpired
}

/// Translate a failed login or registration.
///
/// Backend rejections keep their message. Transport and decode failures carry
/// nothing meaningful for the user and become `fallback`.
pub fn action_failure(err: ApiError, fallback: &str) -> ViewError {
    match err {
        ApiError::Transport(_) | ApiError::Decode(_) => {
            warn!(error = %err, "{fallback}");
            ViewError::Invalid(fallback.to_string())
        }
        err => ViewError::Api(err),
    }
}

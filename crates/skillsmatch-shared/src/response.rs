//! Error bodies returned by the backend.

use serde::Deserialize;

/// Best-effort view of a JSON error body.
///
/// The backend answers failures with `{"message": "..."}`; anything else
/// (HTML error pages, empty bodies, other shapes) yields no message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse a raw body, treating any parse failure as an empty error object.
    pub fn parse(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// The non-empty `message` field of a raw body, if any.
    pub fn message_from(body: &[u8]) -> Option<String> {
        Self::parse(body).message.filter(|m| !m.is_empty())
    }
}

//! Views - the session-consuming screens of the marketplace.
//!
//! Each view calls the resource clients, decides what the current account may
//! do and owns every user-visible message. Resource clients never catch errors;
//! this is where they end up.

pub mod cards;
pub mod directory;
pub mod jobs;
pub mod login;
pub mod nav;
pub mod profile;

use tracing::warn;

use skillsmatch_core::domain::UserType;
use skillsmatch_shared::dto::MeResponse;

use crate::error::{ViewError, ViewResult, session_failure};
use crate::state::AppState;

/// The account looking at a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: String,
    pub user_type: UserType,
}

impl Viewer {
    pub fn owns(&self, user_type: UserType, id: &str) -> bool {
        self.user_type == user_type && self.user_id == id
    }
}

impl From<MeResponse> for Viewer {
    fn from(me: MeResponse) -> Self {
        Self {
            user_id: me.user_id,
            user_type: me.user_type,
        }
    }
}

/// Identity from the stored session, without asking the backend.
pub fn stored_viewer(state: &AppState) -> Option<Viewer> {
    if !state.session.is_logged_in() {
        return None;
    }
    state.session.session().map(|s| Viewer {
        user_id: s.user_id,
        user_type: s.user_type,
    })
}

/// Identity confirmed by `GET /auth/me`.
///
/// `Ok(None)` when nobody is logged in. A rejected token clears the session
/// and yields [`ViewError::SessionExpired`].
pub async fn verified_viewer(state: &AppState) -> ViewResult<Option<Viewer>> {
    if !state.session.is_logged_in() {
        return Ok(None);
    }
    match state.api.auth.me().await {
        Ok(me) => Ok(Some(me.into())),
        Err(e) => Err(session_failure(&state.session, e)),
    }
}

/// Viewer for a page being loaded, plus a notice when the session turned out to be expired.
///
/// Loading a page never fails because of the viewer: an unreachable `me`
/// endpoint falls back to the stored identity.
pub(crate) async fn page_viewer(
    state: &AppState,
    revalidate: bool,
) -> (Option<Viewer>, Option<String>) {
    if !revalidate {
        return (stored_viewer(state), None);
    }
    match verified_viewer(state).await {
        Ok(viewer) => (viewer, None),
        Err(ViewError::SessionExpired) => (None, Some(ViewError::SessionExpired.to_string())),
        Err(e) => {
            warn!(error = %e, "Could not re-validate session; using stored identity");
            (stored_viewer(state), None)
        }
    }
}

/// Identity re-checked right before a mutation.
pub(crate) async fn acting_viewer(state: &AppState) -> ViewResult<Viewer> {
    verified_viewer(state).await?.ok_or(ViewError::NotLoggedIn)
}

#[cfg(test)]
pub(crate) mod test_support {
    use skillsmatch_core::domain::{Session, UserType};
    use skillsmatch_infra::{ApiClient, ApiClientConfig, SessionStore};
    use wiremock::MockServer;

    use crate::state::AppState;

    pub fn state_for(server: &MockServer) -> AppState {
        let session = SessionStore::in_memory();
        let config = ApiClientConfig {
            base_url: server.uri(),
            ..Default::default()
        };
        let client = ApiClient::new(config, session.clone()).unwrap();
        AppState::from_parts(session, client)
    }

    pub fn logged_in_as(server: &MockServer, user_type: UserType, id: &str) -> AppState {
        let state = state_for(server);
        state
            .session
            .save(&Session::new("t1", user_type, id))
            .unwrap();
        state
    }
}

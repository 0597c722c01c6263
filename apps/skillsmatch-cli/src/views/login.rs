//! Login, registration and logout.

use tracing::{info, warn};

use skillsmatch_core::domain::Session;
use skillsmatch_shared::dto::{AuthResponse, BusinessRegistration, StudentRegistration};

use crate::error::{ViewResult, action_failure};
use crate::state::AppState;

pub async fn login(state: &AppState, email: &str, password: &str) -> ViewResult<Session> {
    let auth = state
        .api
        .auth
        .login(email, password)
        .await
        .map_err(|e| action_failure(e, "Login failed"))?;
    start_session(state, auth)
}

pub async fn register_student(
    state: &AppState,
    student: StudentRegistration,
) -> ViewResult<Session> {
    let auth = state
        .api
        .auth
        .register_student(student)
        .await
        .map_err(|e| action_failure(e, "Registration failed"))?;
    start_session(state, auth)
}

pub async fn register_business(
    state: &AppState,
    business: BusinessRegistration,
) -> ViewResult<Session> {
    let auth = state
        .api
        .auth
        .register_business(business)
        .await
        .map_err(|e| action_failure(e, "Registration failed"))?;
    start_session(state, auth)
}

/// Tell the backend, then forget the session locally whatever it answered.
pub async fn logout(state: &AppState) -> ViewResult<()> {
    if state.session.is_logged_in() {
        if let Err(e) = state.api.auth.logout().await {
            warn!(error = %e, "Logout request failed; clearing local session anyway");
        }
    }
    state.session.clear()?;
    info!("Logged out");
    Ok(())
}

fn start_session(state: &AppState, auth: AuthResponse) -> ViewResult<Session> {
    let session = Session::from(auth);
    state.session.save(&session)?;
    info!(user_id = %session.user_id, user_type = %session.user_type, "Logged in");
    Ok(session)
}

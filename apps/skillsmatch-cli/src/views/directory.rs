//! Public listings: students, businesses and the reference lists.

use skillsmatch_core::domain::{Business, Student};

use crate::error::{ViewResult, session_failure};
use crate::state::AppState;

pub async fn list_students(state: &AppState) -> ViewResult<Vec<Student>> {
    state
        .api
        .students
        .list()
        .await
        .map_err(|e| session_failure(&state.session, e))
}

pub async fn list_businesses(state: &AppState) -> ViewResult<Vec<Business>> {
    state
        .api
        .businesses
        .list()
        .await
        .map_err(|e| session_failure(&state.session, e))
}

pub async fn skills(state: &AppState) -> ViewResult<Vec<String>> {
    state
        .api
        .reference
        .skills()
        .await
        .map_err(|e| session_failure(&state.session, e))
}

pub async fn locations(state: &AppState) -> ViewResult<Vec<String>> {
    state
        .api
        .reference
        .locations()
        .await
        .map_err(|e| session_failure(&state.session, e))
}

//! Navigation bar state.

use std::fmt;

use skillsmatch_core::domain::UserType;
use skillsmatch_infra::SessionStore;

/// What the navigation shows for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pub logged_in: bool,
    pub user_type: Option<UserType>,
    pub user_id: Option<String>,
    pub profile_path: String,
}

impl NavBar {
    pub fn from_session(session: &SessionStore) -> Self {
        Self {
            logged_in: session.is_logged_in(),
            user_type: session.user_type(),
            user_id: session.user_id().filter(|id| !id.is_empty()),
            profile_path: session.profile_path(),
        }
    }
}

impl fmt::Display for NavBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.logged_in {
            return write!(f, "Not logged in. Run `skillsmatch login` or `skillsmatch register`.");
        }
        match (&self.user_type, &self.user_id) {
            (Some(user_type), Some(id)) => {
                write!(f, "Logged in as {user_type} {id}\nProfile: {}", self.profile_path)
            }
            _ => write!(f, "Logged in\nProfile: {}", self.profile_path),
        }
    }
}

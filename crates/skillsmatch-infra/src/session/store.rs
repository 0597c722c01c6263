//! Typed access to the three persisted session values.

use std::sync::Arc;

use skillsmatch_core::StorageError;
use skillsmatch_core::domain::{Session, UserType};
use skillsmatch_core::ports::SessionStorage;

use super::InMemorySessionStorage;

pub const TOKEN_KEY: &str = "skillsmatch_token";
pub const USER_TYPE_KEY: &str = "skillsmatch_userType";
pub const USER_ID_KEY: &str = "skillsmatch_userId";

/// Session store over an injectable storage backend.
///
/// A store without storage is "unavailable": every read returns `None` and
/// `save` fails with [`StorageError::Unavailable`].
#[derive(Clone)]
pub struct SessionStore {
    storage: Option<Arc<dyn SessionStorage>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            storage: Some(storage),
        }
    }

    /// Store backed by a fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemorySessionStorage::new()))
    }

    pub fn unavailable() -> Self {
        Self { storage: None }
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }

    /// Persist all three session values. Last write wins.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set(TOKEN_KEY, &session.token)?;
        storage.set(USER_TYPE_KEY, session.user_type.as_str())?;
        storage.set(USER_ID_KEY, &session.user_id)?;
        Ok(())
    }

    /// Remove all three session values. Clearing an unavailable store is a no-op.
    pub fn clear(&self) -> Result<(), StorageError> {
        let Some(storage) = self.storage.as_ref() else {
            return Ok(());
        };
        storage.remove(TOKEN_KEY)?;
        storage.remove(USER_TYPE_KEY)?;
        storage.remove(USER_ID_KEY)?;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    /// Stored user type; unrecognized values read back as `None`.
    pub fn user_type(&self) -> Option<UserType> {
        self.read(USER_TYPE_KEY)?.parse().ok()
    }

    pub fn user_id(&self) -> Option<String> {
        self.read(USER_ID_KEY)
    }

    /// The full session, if all three values are present.
    pub fn session(&self) -> Option<Session> {
        Some(Session::new(self.token()?, self.user_type()?, self.user_id()?))
    }

    /// A non-empty token is necessary and sufficient.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    pub fn is_student(&self) -> bool {
        self.is_logged_in() && self.user_type() == Some(UserType::Student)
    }

    pub fn is_business(&self) -> bool {
        self.is_logged_in() && self.user_type() == Some(UserType::Business)
    }

    /// Profile location of the logged-in account, `/` when there is none.
    pub fn profile_path(&self) -> String {
        match (self.user_type(), self.user_id().filter(|id| !id.is_empty())) {
            (Some(UserType::Student), Some(id)) => format!("/studentprofile/{id}"),
            (Some(UserType::Business), Some(id)) => format!("/businessprofile/{id}"),
            _ => "/".to_string(),
        }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get(key)
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("available", &self.is_available())
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

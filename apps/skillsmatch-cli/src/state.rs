//! Application state - shared across all views.

use std::sync::Arc;

use skillsmatch_core::ApiResult;
use skillsmatch_core::ports::SessionStorage;
use skillsmatch_infra::{
    ApiClient, FileSessionStorage, InMemorySessionStorage, SessionStore, SkillsMatchApi,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub api: SkillsMatchApi,
}

impl AppState {
    /// Build the application state with the persistent session storage.
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let storage: Arc<dyn SessionStorage> = match FileSessionStorage::open(&config.session_file)
        {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::error!(
                    "Failed to open session file: {}. Using in-memory fallback; the session will not persist.",
                    e
                );
                Arc::new(InMemorySessionStorage::new())
            }
        };

        let session = SessionStore::new(storage);
        let client = ApiClient::new(config.api.clone(), session.clone())?;

        tracing::debug!(base_url = %client.base_url(), "Application state initialized");

        Ok(Self::from_parts(session, client))
    }

    pub fn from_parts(session: SessionStore, client: ApiClient) -> Self {
        Self {
            session,
            api: SkillsMatchApi::new(client),
        }
    }
}

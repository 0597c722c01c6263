//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use skillsmatch_infra::ApiClientConfig;

use crate::telemetry::TelemetryConfig;

pub const DEFAULT_SESSION_FILE: &str = ".skillsmatch/session.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiClientConfig,
    /// Where the session survives between invocations.
    pub session_file: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            api: ApiClientConfig::from_env(),
            session_file: env::var("SKILLSMATCH_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            telemetry: TelemetryConfig::from_env(),
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, session_file: Option<PathBuf>) -> Self {
        if let Some(url) = api_url {
            self.api.base_url = url;
        }
        if let Some(path) = session_file {
            self.session_file = path;
        }
        self
    }
}

//! Resource clients - one per backend entity, all pass-through over [`ApiClient`].
//!
//! None of these validate, cache or retry; errors from the request client are
//! returned unchanged.

mod auth;
mod businesses;
mod jobs;
mod reference;
mod students;

pub use auth::AuthApi;
pub use businesses::BusinessesApi;
pub use jobs::JobsApi;
pub use reference::ReferenceApi;
pub use students::StudentsApi;

use crate::http::ApiClient;

/// All resource clients sharing one request client.
#[derive(Debug, Clone)]
pub struct SkillsMatchApi {
    pub auth: AuthApi,
    pub students: StudentsApi,
    pub businesses: BusinessesApi,
    pub jobs: JobsApi,
    pub reference: ReferenceApi,
}

impl SkillsMatchApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            students: StudentsApi::new(client.clone()),
            businesses: BusinessesApi::new(client.clone()),
            jobs: JobsApi::new(client.clone()),
            reference: ReferenceApi::new(client),
        }
    }
}

#[cfg(test)]
mod tests;

//! # SkillsMatch Infrastructure
//!
//! Concrete implementations of the ports defined in `skillsmatch-core`, the
//! authenticated request client and the typed resource clients built on it.

pub mod api;
pub mod http;
pub mod session;

pub use api::{AuthApi, BusinessesApi, JobsApi, ReferenceApi, SkillsMatchApi, StudentsApi};
pub use http::{ApiClient, ApiClientConfig, RequestOptions};
pub use session::{FileSessionStorage, InMemorySessionStorage, SessionStore};

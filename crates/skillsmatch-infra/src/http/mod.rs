//! Authenticated request client.

mod client;

pub use client::{ApiClient, ApiClientConfig, RequestOptions, resource_path};

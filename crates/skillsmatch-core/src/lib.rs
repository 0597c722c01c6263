//! # SkillsMatch Core
//!
//! The domain layer of the SkillsMatch client.
//! This crate contains the marketplace entities, the session storage port and
//! the error taxonomy, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{ApiError, ApiResult, StorageError};

//! # SkillsMatch Shared
//!
//! Wire types exchanged with the SkillsMatch REST API.

pub mod dto;
pub mod response;

pub use response::ErrorBody;

use serde::{Deserialize, Serialize};

/// Business entity - a company that posts jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Business {
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub business_id: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub name: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub email: String,
    /// Average review score.
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub reviews: f64,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub bio: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub jobs_posted: Vec<String>,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub location: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub verified: bool,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub industry: String,
}

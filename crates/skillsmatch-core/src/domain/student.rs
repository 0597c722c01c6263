use serde::{Deserialize, Serialize};

/// Student entity - a student account's public profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Student {
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub student_id: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub first_name: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub last_name: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub email: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub level: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub bio: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub applied_jobs: Vec<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

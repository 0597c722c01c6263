use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::InProgress => "in-progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(JobStatus::Open),
            "in-progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            "cancelled" => Ok(JobStatus::Cancelled),
            other => Err(format!("unknown job status: {other}")),
        }
    }
}

/// Job entity - a posting created by a business that students apply to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Job {
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub job_id: String,
    /// Business id of the poster.
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub created_by: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub title: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub description: String,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub skills_required: Vec<String>,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub budget: f64,
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub status: JobStatus,
    /// Student ids.
    #[serde(deserialize_with = "super::nullable::or_default")]
    pub applicants: Vec<String>,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }

    /// Case-insensitive skill match.
    pub fn requires_skill(&self, skill: &str) -> bool {
        self.skills_required
            .iter()
            .any(|s| s.trim().eq_ignore_ascii_case(skill.trim()))
    }

    pub fn has_applicant(&self, student_id: &str) -> bool {
        self.applicants.iter().any(|id| id == student_id)
    }
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two kinds of marketplace accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Student,
    Business,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "student",
            UserType::Business => "business",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(UserType::Student),
            "business" => Ok(UserType::Business),
            other => Err(format!("unknown user type: {other}")),
        }
    }
}

/// Client-held proof of authentication.
///
/// Created from a successful login or registration, overwritten on re-login
/// and cleared on logout. No expiry is tracked here; the backend decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user_type: UserType,
    pub user_id: String,
}

impl Session {
    pub fn new(token: impl Into<String>, user_type: UserType, user_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            user_type,
            user_id: user_id.into(),
        }
    }

    /// Whether this session belongs to the given account.
    pub fn is_owner_of(&self, user_type: UserType, id: &str) -> bool {
        self.user_type == user_type && self.user_id == id
    }
}

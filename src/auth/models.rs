//! Authentication Models

use serde::{Deserialize, Serialize};

/// A fixture user. Passwords are stored and compared in plaintext.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,

    pub password: String,

    /// Preset session token. Users without one are issued a token on first login.
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Body of `POST /api/login`
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns the credential pair when both fields are present and non-blank.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|s| !s.trim().is_empty())?;
        let password = self.password.as_deref().filter(|s| !s.trim().is_empty())?;
        Some((username, password))
    }
}

/// Response for a successful login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub username: String,
    pub access_token: String,
}

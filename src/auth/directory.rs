//! Fixture-backed user directory.

use std::path::Path;

use super::models::User;
use crate::error::Result;

const EMBEDDED_USERS: &str = include_str!("../../data/users.json");

/// Immutable collection of known users.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn from_json(users: &str) -> Result<Self> {
        Ok(Self::new(serde_json::from_str(users)?))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_USERS)
    }

    /// Reads `users.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let users = std::fs::read_to_string(dir.join("users.json"))?;
        Self::from_json(&users)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Exact username and password match.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&User> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }
}

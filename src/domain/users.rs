//! Read-only user directory, seeded once at startup.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub user_name: String,
    pub email: String,
    pub user_type: String,
    pub user_role: String,
    pub managing_location: String,
    pub status: String,
    pub last_login: String,
}

impl UserRecord {
    fn placeholder(id: u64) -> Self {
        Self {
            id,
            user_name: "Sample data".to_string(),
            email: "sample@example.com".to_string(),
            user_type: "Admin".to_string(),
            user_role: "Manager".to_string(),
            managing_location: "Location 1".to_string(),
            status: "Active".to_string(),
            last_login: "2024-07-25".to_string(),
        }
    }
}

pub const PLACEHOLDER_USERS: u64 = 9;

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// The built-in placeholder directory.
    pub fn placeholder() -> Self {
        Self::new((1..=PLACEHOLDER_USERS).map(UserRecord::placeholder).collect())
    }

    /// Loads a directory from a JSON array of user records.
    pub fn from_fixture(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read(path)
            .with_context(|| format!("failed to read user fixture {}", path.display()))?;
        let users: Vec<UserRecord> = serde_json::from_slice(&raw)
            .with_context(|| format!("invalid user fixture {}", path.display()))?;
        Ok(Self::new(users))
    }

    pub fn list(&self) -> &[UserRecord] {
        &self.users
    }
}

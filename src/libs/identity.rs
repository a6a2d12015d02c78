//! The signed-in user, as seen by the attendance core.
//!
//! The core never owns the identity; it only reads who is signed in and
//! reacts when that changes. On disk the identity is a small JSON document
//! (`user.json`) written by `clockin signin` and removed by `clockin signout`.

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const IDENTITY_FILE_NAME: &str = "user.json";

/// Roles allowed to search and filter the remote attendance log.
pub const MANAGER_ROLES: [&str; 2] = ["admin", "manager"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub employee_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Identity {
    pub fn new(employee_id: &str, name: &str) -> Self {
        Self {
            employee_id: employee_id.to_owned(),
            name: name.to_owned(),
            role: None,
        }
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_owned());
        self
    }

    /// Whether this user may search and filter attendance records.
    pub fn can_filter_records(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| MANAGER_ROLES.iter().any(|m| role.trim().eq_ignore_ascii_case(m)))
    }
}

/// Read-only view of the current user.
pub trait IdentitySource {
    /// The signed-in user, or `None` when nobody is authenticated.
    fn current(&self) -> Option<Identity>;

    fn is_authenticated(&self) -> bool {
        self.current().is_some()
    }
}

/// Identity persisted as JSON in the application data directory.
#[derive(Debug, Clone)]
pub struct FileIdentity {
    path: PathBuf,
}

impl FileIdentity {
    pub fn new() -> Result<Self> {
        Ok(Self::at(DataStorage::new().get_path(IDENTITY_FILE_NAME)?))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(identity)?)?;
        Ok(())
    }

    /// Signs the user out. A missing file is not an error.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl IdentitySource for FileIdentity {
    fn current(&self) -> Option<Identity> {
        let raw = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), "unreadable identity file: {}", e);
                None
            }
        }
    }
}

/// Fixed identity, for tests and embedding.
impl IdentitySource for Option<Identity> {
    fn current(&self) -> Option<Identity> {
        self.clone()
    }
}

//! Logged-in user session.
//!
//! The session is a small JSON file next to the settings. It only records
//! who is logged in; the server owns the account itself.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::settings::UserSettings;

/// Session file name within the config directory
const SESSION_FILE: &str = "session.json";

/// Email shown when nobody is logged in
pub const GUEST_EMAIL: &str = "visitante@vora.ai";

/// Demo account used by the "try it" login
pub const DEMO_EMAIL: &str = "demo@vora.ai";
pub const DEMO_NAME: &str = "Demo User";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Config directory not available")]
    NoConfigDir,

    #[error("Failed to read session: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse session: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Who is logged in
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nome: Option<String>,
}

impl UserSession {
    pub fn new(email: impl Into<String>, nome: Option<String>) -> Self {
        Self {
            email: email.into(),
            nome,
        }
    }

    pub fn demo() -> Self {
        Self::new(DEMO_EMAIL, Some(DEMO_NAME.to_string()))
    }

    /// A session without an email does not unlock the platform view
    pub fn is_authenticated(&self) -> bool {
        !self.email.trim().is_empty()
    }
}

/// Display information derived from an optional session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserMeta {
    pub email: String,
    pub display_name: String,
    pub initial: char,
}

impl UserMeta {
    pub fn from_session(session: Option<&UserSession>) -> Self {
        let email = session
            .map(|s| s.email.trim())
            .filter(|e| !e.is_empty())
            .unwrap_or(GUEST_EMAIL)
            .to_string();

        let display_name = session
            .and_then(|s| s.nome.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .or_else(|| {
                email
                    .split('@')
                    .next()
                    .filter(|local| !local.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "User".to_string());

        let initial = display_name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U');

        Self {
            email,
            display_name,
            initial,
        }
    }
}

/// File-backed storage for the current session
#[derive(Clone, Debug)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the standard config directory
    pub fn default_location() -> Result<Self, SessionError> {
        UserSettings::get_config_dir()
            .map(|dir| Self::at(dir.join(SESSION_FILE)))
            .ok_or(SessionError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session; a missing file means nobody is logged in
    pub fn load(&self) -> Result<Option<UserSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let session: UserSession = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    pub fn save(&self, session: &UserSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(session)?)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

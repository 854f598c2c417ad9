//! Persisted login session.

use std::path::{Path, PathBuf};

use jobboard_core::domain::UserInfo;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClientResult;

const SESSION_FILE: &str = "session.json";

/// Token and user returned by login/register
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

/// JSON file holding the current session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `session.json` in the OS config directory, or the working directory
    /// when none can be determined.
    pub fn default_location() -> Self {
        let path = directories::ProjectDirs::from("", "", "jobboard")
            .map(|dirs| dirs.config_dir().join(SESSION_FILE))
            .unwrap_or_else(|| PathBuf::from(SESSION_FILE));
        Self::at(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> ClientResult<Option<Session>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the session file; returns whether one existed.
    pub fn clear(&self) -> ClientResult<bool> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::domain::Role;

    fn session() -> Session {
        Session {
            token: "tok".into(),
            user: UserInfo {
                id: 3,
                email: "c@example.com".into(),
                name: "C".into(),
                role: Role::Candidate,
            },
        }
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("nested").join("session.json"));

        assert_eq!(store.load().unwrap(), None);
        store.save(&session()).unwrap();
        assert_eq!(store.load().unwrap(), Some(session()));

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(SessionStore::at(path).load().is_err());
    }
}

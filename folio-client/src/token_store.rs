//! Bearer token persistence — JSON save/load across sessions.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    token: String,
}

/// On-disk home for the opaque bearer token.
///
/// The token is the only thing persisted between sessions; user identity is
/// re-fetched from `/user` on every startup.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default per-user location: `<config dir>/folio/session.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("session.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored token. Missing or corrupt file reads as no token.
    pub fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str::<PersistedSession>(&content)
            .ok()
            .map(|s| s.token)
    }

    /// Persist a token. Creates parent directories if needed.
    pub fn save(&self, token: &str) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ApiError::Storage(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(&PersistedSession {
            token: token.to_string(),
        })
        .map_err(|e| ApiError::Storage(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| ApiError::Storage(e.to_string()))
    }

    /// Discard the stored token. Absent file is already-clear.
    pub fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(e.to_string())),
        }
    }
}

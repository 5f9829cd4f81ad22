//! Stored API credential.
//!
//! The console talks to the membership API with a DRF-style token
//! (`Authorization: Token <value>`). Obtaining the token is someone
//! else's job (an admin logs in out of band); this module only persists
//! it so every view can use it without re-prompting.
//!
//! File location: `<config_dir>/credentials.json`, key `token`.
//!
//! The file is read once at startup and the value injected into the API
//! client; nothing reads it ambiently per request.

use crate::{Config, ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CREDENTIALS_FILENAME: &str = "credentials.json";

/// Contents of the credential file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialFile {
    /// The API token, verbatim
    pub token: String,
    /// ISO 8601 timestamp when the token was stored
    pub saved_at: String,
}

impl CredentialFile {
    /// Path of the credential file under the configured directory.
    pub fn path() -> ConfigErrorResult<PathBuf> {
        Ok(Config::config_dir()?.join(CREDENTIALS_FILENAME))
    }

    /// Ensure the parent directory of a path exists.
    fn ensure_parent_dir(path: &Path) -> ConfigErrorResult<()> {
        if let Some(dir) = path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Persist a token, replacing any previous one.
    pub fn save(token: &str) -> ConfigErrorResult<PathBuf> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ConfigError::credentials("refusing to store an empty token"));
        }

        let path = Self::path()?;
        Self::ensure_parent_dir(&path)?;

        let file = CredentialFile {
            token: token.to_string(),
            saved_at: chrono::Utc::now().to_rfc3339(),
        };

        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| ConfigError::credentials(format!("Failed to serialize token: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read the stored credential, if any.
    ///
    /// Returns `Ok(None)` when no token has been stored; a corrupt file
    /// is an error so the operator finds out instead of silently running
    /// unauthenticated.
    pub fn load() -> ConfigErrorResult<Option<CredentialFile>> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let file = serde_json::from_str(&contents).map_err(|e| ConfigError::Json {
            path: path.clone(),
            source: e,
        })?;

        Ok(Some(file))
    }

    /// Remove the stored credential. Returns whether a file was removed.
    pub fn clear() -> ConfigErrorResult<bool> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(true)
    }
}

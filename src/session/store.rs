use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::LoginHash;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session file I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Session file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of the session file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    #[serde(default)]
    login_hash: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

/// A restored login: credential plus the user it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub login_hash: LoginHash,
    pub user_id: String,
}

/// File-backed session store.
///
/// Reads hold a shared `fs2` lock, writes an exclusive one.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session.
    ///
    /// A missing file or a file without a login hash means "logged out".
    pub fn load(&self) -> Result<Option<StoredSession>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        file.lock_shared().map_err(|e| self.io_error(e))?;
        let mut content = String::new();
        let read = file.read_to_string(&mut content);
        let _ = FileExt::unlock(&file);
        read.map_err(|e| self.io_error(e))?;

        if content.trim().is_empty() {
            return Ok(None);
        }

        let stored: SessionFile =
            serde_json::from_str(&content).map_err(|e| SessionError::Corrupt {
                path: self.path.clone(),
                source: e,
            })?;

        let Some(login_hash) = stored.login_hash.and_then(LoginHash::from_encoded) else {
            return Ok(None);
        };

        Ok(Some(StoredSession {
            login_hash,
            user_id: stored.user_id.unwrap_or_default(),
        }))
    }

    /// Persist a session, replacing any previous one.
    pub fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let body = SessionFile {
            login_hash: Some(session.login_hash.expose().to_string()),
            user_id: Some(session.user_id.clone()),
        };
        let json = serde_json::to_string_pretty(&body).map_err(|e| SessionError::Corrupt {
            path: self.path.clone(),
            source: e,
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.lock_exclusive().map_err(|e| self.io_error(e))?;
        let result = write_locked(&mut file, json.as_bytes());
        let _ = FileExt::unlock(&file);
        result.map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    /// Remove the stored session. Missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "session cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Truncate-then-write while holding the lock.
fn write_locked(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.flush()?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("nested").join("session.json"))
    }

    #[test]
    fn missing_file_means_logged_out() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn save_then_load_restores_session() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let session = StoredSession {
            login_hash: LoginHash::from_credentials("ada", "pw"),
            user_id: "u-1".to_string(),
        };
        store.save(&session).unwrap();

        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn file_uses_login_hash_key() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&StoredSession {
                login_hash: LoginHash::from_credentials("ada", "pw"),
                user_id: "u-1".to_string(),
            })
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["loginHash"], "YWRhOnB3");
        assert_eq!(value["userId"], "u-1");
    }

    #[test]
    fn shorter_save_does_not_leave_trailing_bytes() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&StoredSession {
                login_hash: LoginHash::from_credentials("a-very-long-username", "long-password"),
                user_id: "a-long-user-identifier".to_string(),
            })
            .unwrap();
        let short = StoredSession {
            login_hash: LoginHash::from_credentials("a", "b"),
            user_id: "u".to_string(),
        };
        store.save(&short).unwrap();

        assert_eq!(store.load().unwrap(), Some(short));
    }

    #[test]
    fn clear_removes_session_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&StoredSession {
                login_hash: LoginHash::from_credentials("ada", "pw"),
                user_id: "u-1".to_string(),
            })
            .unwrap();

        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(store.load(), Err(SessionError::Corrupt { .. })));
    }

    #[test]
    fn empty_login_hash_means_logged_out() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), r#"{"loginHash": "", "userId": "u"}"#).unwrap();

        assert_eq!(store.load().unwrap(), None);
    }
}

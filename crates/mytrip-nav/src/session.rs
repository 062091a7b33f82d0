//! # Session Flag
//!
//! The persisted credential marker and the one-shot reader that turns it
//! into an initial [`AuthState`].
//!
//! The store is process-wide and outlives any single view. This module only
//! reads it; writing and clearing belong to the login view and the profile
//! menu's logout path.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::error::Result;
use crate::state::AuthState;

/// Key under which the session token is stored.
pub const SESSION_KEY: &str = "token";

/// A persistent key/value store holding the session flag.
pub trait SessionStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Reads the session flag once and derives the initial authentication state.
///
/// Any non-empty value counts as logged in; the contents are not validated.
/// A missing key, an empty value and a failing store all yield
/// [`AuthState::LoggedOut`].
pub fn read_auth_state(store: &dyn SessionStore) -> AuthState {
    match store.get(SESSION_KEY) {
        Ok(Some(token)) if !token.is_empty() => AuthState::LoggedIn,
        Ok(_) => AuthState::LoggedOut,
        Err(e) => {
            tracing::debug!(error = %e, "Session store unavailable, treating as logged out");
            AuthState::LoggedOut
        }
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds a session token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let store = Self::new();
        store
            .entries
            .write()
            .insert(SESSION_KEY.to_string(), token.into());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Session store backed by a JSON object file.
///
/// A missing file is an empty store. Every operation goes to disk so that
/// separate handles on the same path observe each other's writes.
///
/// Writes go to a sibling temporary file that is renamed over the store, so
/// a crash mid-write leaves the previous contents intact. A file that cannot
/// be read or parsed is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store at `path`. Nothing is touched until first use.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(HashMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the entries to update. An unreadable or corrupt file counts as
    /// empty, and the returned flag asks the caller to overwrite it.
    fn load_for_write(&self) -> (HashMap<String, String>, bool) {
        match self.load() {
            Ok(entries) => (entries, false),
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "Discarding unreadable session file");
                (HashMap::new(), true)
            }
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn store(&self, entries: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;

        let temp = self.temp_path();
        fs::write(&temp, contents)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let (mut entries, _) = self.load_for_write();
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)?;
        tracing::debug!(path = ?self.path, key, "Wrote session entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let (mut entries, reset) = self.load_for_write();
        if entries.remove(key).is_some() || reset {
            self.store(&entries)?;
            tracing::debug!(path = ?self.path, key, "Removed session entry");
        }
        Ok(())
    }
}

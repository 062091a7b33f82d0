//! # Session
//!
//! Sign-in and sign-out against the shared session store.

use std::path::PathBuf;
use std::sync::Arc;

use mytrip_nav::{
    read_auth_state, FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY,
};

/// Handle to the process-wide session store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn SessionStore>,
}

impl Session {
    /// Opens the session file at `path`, or an in-memory store when there
    /// is no data directory.
    #[must_use]
    pub fn open(path: Option<PathBuf>) -> Self {
        let store: Arc<dyn SessionStore> = match path {
            Some(path) => {
                let store = FileSessionStore::new(path);
                tracing::debug!(path = ?store.path(), "Using session file");
                Arc::new(store)
            }
            None => {
                tracing::warn!("No data directory, session will not persist");
                Arc::new(MemorySessionStore::new())
            }
        };
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    /// Returns true if a session flag is currently stored.
    #[must_use]
    pub fn is_active(&self) -> bool {
        read_auth_state(self.store.as_ref()).is_logged_in()
    }

    /// Stores a session token.
    pub fn sign_in(&self, token: &str) -> mytrip_nav::Result<()> {
        self.store.set(SESSION_KEY, token).inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to store session token");
        })?;
        tracing::info!("Signed in");
        Ok(())
    }

    /// Clears the session flag. Failures are logged, not surfaced.
    pub fn sign_out(&self) {
        match self.store.remove(SESSION_KEY) {
            Ok(()) => tracing::info!("Signed out"),
            Err(e) => tracing::warn!(error = %e, "Failed to clear session token"),
        }
    }
}

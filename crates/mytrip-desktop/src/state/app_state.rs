//! # Application State
//!
//! Global state management using Dioxus signals and context.

use std::sync::Arc;

use dioxus::prelude::*;
use mytrip_nav::{CategoryId, SessionStore, ThemeMode};

use super::session::Session;
use crate::config::LaunchOptions;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///     let epoch = state.session_epoch.read();
///
///     rsx! {
///         p { "Session changes: {epoch}" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Process-wide session store holding the `token` flag.
    session: Signal<Session>,

    /// Palette of the navigation bar. Fixed at launch.
    pub theme: ThemeMode,

    /// Highlighted category tab. Fixed at launch.
    pub selected_category: Option<CategoryId>,

    /// Bumped on every sign-in and sign-out. The navigation bar is keyed on
    /// it and remounts to reread the session flag; views that show session
    /// dependent content read it to re-render.
    pub session_epoch: Signal<u64>,
}

impl AppState {
    /// Creates the application state from startup options.
    #[must_use]
    pub fn new(options: &LaunchOptions) -> Self {
        Self {
            session: Signal::new(Session::open(options.session_path.clone())),
            theme: options.config.theme,
            selected_category: options.config.selected_category,
            session_epoch: Signal::new(0),
        }
    }

    /// Returns a handle to the session store.
    #[must_use]
    pub fn session_store(&self) -> Arc<dyn SessionStore> {
        self.session.read().store()
    }

    /// Returns true if a session flag is currently stored.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.read().is_active()
    }

    /// Stores a session token and remounts the navigation bar.
    ///
    /// Nothing changes if the token could not be stored.
    pub fn sign_in(&mut self, token: &str) -> mytrip_nav::Result<()> {
        self.session.read().sign_in(token)?;
        *self.session_epoch.write() += 1;
        Ok(())
    }

    /// Clears the session flag.
    ///
    /// The mounted bar is told separately through its logout handler.
    pub fn sign_out(&mut self) {
        self.session.read().sign_out();
        *self.session_epoch.write() += 1;
    }
}

/// Generates a fresh random session token.
#[must_use]
pub fn issue_token() -> String {
    hex::encode(rand::random::<[u8; 16]>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token_shape() {
        let token = issue_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_issue_token_unique() {
        assert_ne!(issue_token(), issue_token());
    }
}

//! # Navigation State
//!
//! The three UI flags owned by a mounted navigation bar and the transitions
//! user events drive them through.
//!
//! ```text
//!              avatar click
//!   (LoggedIn, Hidden) <-----> (LoggedIn, Visible)
//!          |                          |
//!          +--------- logout ---------+
//!                       |
//!                       v
//!              (LoggedOut, Hidden)
//! ```
//!
//! Nothing leads back to `LoggedIn` except mounting a fresh state.

use serde::{Deserialize, Serialize};

use crate::session::{read_auth_state, SessionStore};

/// Whether the bar shows the signed-in or the signed-out variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthState {
    /// No session flag at mount, or logged out since.
    #[default]
    LoggedOut,
    /// A session flag was present at mount.
    LoggedIn,
}

impl AuthState {
    /// Returns true for [`AuthState::LoggedIn`].
    #[must_use]
    pub fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// Whether the profile dropdown is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileMenuVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ProfileMenuVisibility {
    /// Returns the opposite visibility.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Focus of the search input. Only affects coloring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchFocusState {
    #[default]
    Unfocused,
    Focused,
}

impl From<bool> for SearchFocusState {
    fn from(focused: bool) -> Self {
        if focused {
            Self::Focused
        } else {
            Self::Unfocused
        }
    }
}

impl SearchFocusState {
    #[must_use]
    pub fn is_focused(self) -> bool {
        matches!(self, Self::Focused)
    }
}

/// Local state of one mounted navigation bar.
///
/// Fields are private so every mutation goes through a transition that
/// keeps the menu hidden while logged out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    auth: AuthState,
    profile_menu: ProfileMenuVisibility,
    search_focus: SearchFocusState,
}

impl NavState {
    /// Creates a state with the menu hidden and the search unfocused.
    #[must_use]
    pub fn new(auth: AuthState) -> Self {
        Self {
            auth,
            ..Self::default()
        }
    }

    /// Creates the state for a fresh mount, reading the session flag once.
    ///
    /// Later changes to the store are not observed; remount to pick them up.
    pub fn mount(store: &dyn SessionStore) -> Self {
        let auth = read_auth_state(store);
        tracing::debug!(?auth, "Navigation bar mounted");
        Self::new(auth)
    }

    #[must_use]
    pub fn auth(&self) -> AuthState {
        self.auth
    }

    #[must_use]
    pub fn profile_menu(&self) -> ProfileMenuVisibility {
        self.profile_menu
    }

    #[must_use]
    pub fn search_focus(&self) -> SearchFocusState {
        self.search_focus
    }

    /// Flips the profile menu. Does nothing while logged out.
    pub fn toggle_profile_menu(&mut self) {
        let next = self.profile_menu.toggled();
        self.set_profile_menu(next);
    }

    /// Sets the profile menu visibility.
    ///
    /// Requests to show the menu while logged out are ignored.
    pub fn set_profile_menu(&mut self, visibility: ProfileMenuVisibility) {
        if visibility.is_visible() && !self.auth.is_logged_in() {
            tracing::debug!("Ignoring profile menu open while logged out");
            return;
        }
        if self.profile_menu != visibility {
            tracing::debug!(?visibility, "Profile menu visibility changed");
            self.profile_menu = visibility;
        }
    }

    /// Hides the profile menu (outside click, explicit close).
    pub fn hide_profile_menu(&mut self) {
        self.set_profile_menu(ProfileMenuVisibility::Hidden);
    }

    /// Records focus or blur of the search input.
    pub fn set_search_focus(&mut self, focused: bool) {
        self.search_focus = focused.into();
    }

    /// Sets the authentication state.
    ///
    /// Becoming logged out also hides the profile menu in the same update.
    pub fn set_auth_state(&mut self, auth: AuthState) {
        self.auth = auth;
        if !auth.is_logged_in() {
            self.profile_menu = ProfileMenuVisibility::Hidden;
        }
    }

    /// Logs out: the bar switches to the signed-out variant with the menu
    /// closed.
    pub fn logout(&mut self) {
        tracing::debug!("Navigation bar logged out");
        self.set_auth_state(AuthState::LoggedOut);
    }

    /// Returns true when the menu-hidden-while-logged-out invariant holds.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.auth.is_logged_in() || !self.profile_menu.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    fn logged_in() -> NavState {
        NavState::new(AuthState::LoggedIn)
    }

    #[test]
    fn test_mount_starts_hidden() {
        let state = NavState::mount(&MemorySessionStore::with_token("abc"));
        assert_eq!(state.auth(), AuthState::LoggedIn);
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
        assert_eq!(state.search_focus(), SearchFocusState::Unfocused);

        let state = NavState::mount(&MemorySessionStore::new());
        assert_eq!(state.auth(), AuthState::LoggedOut);
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn test_mount_does_not_observe_later_writes() {
        let store = MemorySessionStore::new();
        let state = NavState::mount(&store);
        store.set(crate::SESSION_KEY, "abc").unwrap();
        assert_eq!(state.auth(), AuthState::LoggedOut);
    }

    #[test]
    fn test_toggle_profile_menu() {
        let mut state = logged_in();
        state.toggle_profile_menu();
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Visible);
        state.toggle_profile_menu();
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn test_toggle_while_logged_out_is_noop() {
        let mut state = NavState::new(AuthState::LoggedOut);
        state.toggle_profile_menu();
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
        assert!(state.is_consistent());
    }

    #[test]
    fn test_set_profile_menu_visible_while_logged_out_ignored() {
        let mut state = NavState::new(AuthState::LoggedOut);
        state.set_profile_menu(ProfileMenuVisibility::Visible);
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn test_hide_profile_menu() {
        let mut state = logged_in();
        state.toggle_profile_menu();
        state.hide_profile_menu();
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
        // Already hidden
        state.hide_profile_menu();
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn test_search_focus_blur() {
        let mut state = logged_in();
        state.set_search_focus(true);
        assert!(state.search_focus().is_focused());
        state.set_search_focus(false);
        assert_eq!(state.search_focus(), SearchFocusState::Unfocused);
    }

    #[test]
    fn test_logout_hides_menu() {
        let mut state = logged_in();
        state.toggle_profile_menu();
        state.logout();
        assert_eq!(state.auth(), AuthState::LoggedOut);
        assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn test_logout_setters_in_either_order() {
        // Collaborator hides first, then logs out
        let mut a = logged_in();
        a.toggle_profile_menu();
        a.hide_profile_menu();
        a.set_auth_state(AuthState::LoggedOut);

        // Collaborator logs out first, then hides
        let mut b = logged_in();
        b.toggle_profile_menu();
        b.set_auth_state(AuthState::LoggedOut);
        b.hide_profile_menu();

        assert_eq!(a, b);
        assert_eq!(a.auth(), AuthState::LoggedOut);
        assert_eq!(a.profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn test_logout_keeps_search_focus() {
        let mut state = logged_in();
        state.set_search_focus(true);
        state.logout();
        assert!(state.search_focus().is_focused());
    }
}

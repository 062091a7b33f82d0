//! End-to-end navigation bar scenarios.
//!
//! Each test mounts a bar against a session store, drives it with the same
//! events the desktop app sends, and checks the composed view.

use mytrip_nav::compose::DropdownView;
use mytrip_nav::data::{categories, login_profile_menus};
use mytrip_nav::{
    compose, AuthState, CategoryId, CategoryRecord, MemorySessionStore, NavProps, NavState,
    NavTarget, ProfileBar, ProfileMenuVisibility, SessionStore, ThemeMode, SESSION_KEY,
};

fn default_props() -> NavProps {
    NavProps::new(ThemeMode::Normal, categories(), login_profile_menus())
}

fn dropdown_visible(view: &mytrip_nav::NavView) -> Option<bool> {
    match &view.profile {
        ProfileBar::LoggedIn {
            dropdown: DropdownView { visible, .. },
            ..
        } => Some(*visible),
        ProfileBar::LoggedOut { .. } => None,
    }
}

#[test]
fn test_no_session_renders_login_and_signup() {
    let store = MemorySessionStore::new();
    let state = NavState::mount(&store);
    let view = compose(&state, &default_props());

    let ProfileBar::LoggedOut { links } = &view.profile else {
        panic!("expected the signed-out bar");
    };
    let login = links.iter().find(|l| l.label == "로그인").unwrap();
    let signup = links.iter().find(|l| l.label == "회원가입").unwrap();
    assert_eq!(login.target, Some(NavTarget::Login));
    assert_eq!(signup.target, Some(NavTarget::Signup));

    // No avatar, so no dropdown either
    assert_eq!(dropdown_visible(&view), None);
}

#[test]
fn test_session_token_renders_avatar_and_toggles_dropdown() {
    let store = MemorySessionStore::with_token("abc");
    let mut state = NavState::mount(&store);
    let props = default_props();

    assert_eq!(dropdown_visible(&compose(&state, &props)), Some(false));

    // Avatar click
    state.toggle_profile_menu();
    assert_eq!(state.profile_menu(), ProfileMenuVisibility::Visible);
    assert_eq!(dropdown_visible(&compose(&state, &props)), Some(true));

    // Second click
    state.toggle_profile_menu();
    assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    assert_eq!(dropdown_visible(&compose(&state, &props)), Some(false));
}

#[test]
fn test_logout_from_open_menu() {
    let store = MemorySessionStore::with_token("abc");
    let mut state = NavState::mount(&store);
    state.toggle_profile_menu();

    // What the profile menu does on logout: clear the flag, then tell the bar
    store.remove(SESSION_KEY).unwrap();
    state.logout();

    assert_eq!(state.auth(), AuthState::LoggedOut);
    assert_eq!(state.profile_menu(), ProfileMenuVisibility::Hidden);
    assert!(matches!(
        compose(&state, &default_props()).profile,
        ProfileBar::LoggedOut { .. }
    ));

    // A remount sees the cleared flag
    assert_eq!(NavState::mount(&store).auth(), AuthState::LoggedOut);
}

#[test]
fn test_flights_tab_is_the_only_selected_one() {
    let cats = vec![CategoryRecord::new(1, "항공권"), CategoryRecord::new(2, "숙소")];
    let props = NavProps::new(ThemeMode::Normal, cats, Vec::new());
    let view = compose(&NavState::default(), &props);

    let selected: Vec<_> = view.tabs.iter().filter(|t| t.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].label, "항공권");
    assert_eq!(selected[0].id, CategoryId(1));
}

#[test]
fn test_selected_tab_is_configurable() {
    let cats = vec![CategoryRecord::new(1, "항공권"), CategoryRecord::new(2, "숙소")];
    let props = NavProps::new(ThemeMode::Transparent, cats, Vec::new())
        .with_selected(Some(CategoryId(2)));
    let view = compose(&NavState::default(), &props);

    assert!(!view.tabs[0].selected);
    assert!(view.tabs[1].selected);
    assert_eq!(view.tabs[1].color, "white");
    assert_eq!(view.tabs[0].color, "rgba(255, 255, 255, 0.7)");
}

#[test]
fn test_login_elsewhere_needs_remount() {
    let store = MemorySessionStore::new();
    let state = NavState::mount(&store);

    store.set(SESSION_KEY, "fresh-token").unwrap();
    assert_eq!(state.auth(), AuthState::LoggedOut);
    assert_eq!(NavState::mount(&store).auth(), AuthState::LoggedIn);
}

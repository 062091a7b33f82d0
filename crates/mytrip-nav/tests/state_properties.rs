//! Property-based tests for the navigation state transitions.

use mytrip_nav::compose::selected_index;
use mytrip_nav::theme::search_icon_color;
use mytrip_nav::{
    compose, read_auth_state, AuthState, CategoryRecord, MemorySessionStore, NavProps, NavState,
    ProfileMenuVisibility, SearchFocusState, ThemeMode,
};
use proptest::prelude::*;

/// One user or collaborator event.
#[derive(Debug, Clone)]
enum Event {
    AvatarClick,
    Focus(bool),
    Close,
    Show,
    Logout,
    SetAuth(AuthState),
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::AvatarClick),
        any::<bool>().prop_map(Event::Focus),
        Just(Event::Close),
        Just(Event::Show),
        Just(Event::Logout),
        Just(Event::SetAuth(AuthState::LoggedIn)),
        Just(Event::SetAuth(AuthState::LoggedOut)),
    ]
}

fn auth_strategy() -> impl Strategy<Value = AuthState> {
    prop_oneof![Just(AuthState::LoggedIn), Just(AuthState::LoggedOut)]
}

fn theme_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Normal), Just(ThemeMode::Transparent)]
}

fn apply(state: &mut NavState, event: &Event) {
    match event {
        Event::AvatarClick => state.toggle_profile_menu(),
        Event::Focus(focused) => state.set_search_focus(*focused),
        Event::Close => state.hide_profile_menu(),
        Event::Show => state.set_profile_menu(ProfileMenuVisibility::Visible),
        Event::Logout => state.logout(),
        Event::SetAuth(auth) => state.set_auth_state(*auth),
    }
}

proptest! {
    #[test]
    fn prop_mount_reads_presence(token in proptest::option::of(".{0,16}")) {
        let store = match &token {
            Some(t) => MemorySessionStore::with_token(t.clone()),
            None => MemorySessionStore::new(),
        };
        let expected = match token {
            Some(t) if !t.is_empty() => AuthState::LoggedIn,
            _ => AuthState::LoggedOut,
        };
        prop_assert_eq!(read_auth_state(&store), expected);
        prop_assert_eq!(NavState::mount(&store).profile_menu(), ProfileMenuVisibility::Hidden);
    }

    #[test]
    fn prop_hidden_whenever_logged_out(
        auth in auth_strategy(),
        events in prop::collection::vec(event_strategy(), 0..64),
    ) {
        let mut state = NavState::new(auth);
        prop_assert!(state.is_consistent());
        for event in &events {
            apply(&mut state, event);
            prop_assert!(state.is_consistent(), "violated after {:?}", event);
        }
    }

    #[test]
    fn prop_toggle_is_involution(
        events in prop::collection::vec(event_strategy(), 0..32),
    ) {
        let mut state = NavState::new(AuthState::LoggedIn);
        for event in &events {
            apply(&mut state, event);
        }
        let before = state;
        state.toggle_profile_menu();
        state.toggle_profile_menu();
        prop_assert_eq!(state, before);
    }

    #[test]
    fn prop_focus_then_blur_unfocuses(auth in auth_strategy(), theme in theme_strategy()) {
        let mut state = NavState::new(auth);
        state.set_search_focus(true);
        prop_assert_eq!(
            compose(&state, &NavProps::new(theme, Vec::new(), Vec::new())).search.icon_color,
            search_icon_color(theme, SearchFocusState::Focused)
        );
        state.set_search_focus(false);
        prop_assert_eq!(state.search_focus(), SearchFocusState::Unfocused);
    }

    #[test]
    fn prop_at_most_one_selected_tab(
        records in prop::collection::vec(
            (0u32..4, prop_oneof![Just("항공권"), Just("숙소"), Just("렌터카")]),
            0..12,
        ),
    ) {
        let cats: Vec<_> = records
            .iter()
            .map(|&(id, name)| CategoryRecord::new(id, name))
            .collect();
        let expected = selected_index(&cats, None);
        let view = compose(&NavState::default(), &NavProps::new(ThemeMode::Normal, cats, Vec::new()));

        let selected: Vec<_> = view
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, t)| t.selected)
            .collect();
        let has_flights = records.iter().any(|&(_, name)| name == "항공권");
        prop_assert_eq!(selected.len(), usize::from(has_flights));
        prop_assert_eq!(selected.first().map(|(i, _)| *i), expected);
        if let Some((_, tab)) = selected.first() {
            prop_assert_eq!(tab.label.as_str(), "항공권");
        }
    }
}

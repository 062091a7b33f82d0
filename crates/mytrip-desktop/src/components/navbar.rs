//! # Navigation Bar
//!
//! Top bar with logo, search input, login state and category tabs.

use dioxus::prelude::*;
use mytrip_nav::compose::NavLink;
use mytrip_nav::data::{categories, login_profile_menus};
use mytrip_nav::{
    compose, CategoryId, LogoVariant, NavProps, NavState, ProfileBar, TabView, ThemeMode,
};

use super::ProfileMenu;
use crate::router::Route;
use crate::state::AppState;

/// Navigation bar component.
///
/// Reads the session flag once when mounted. Signing in elsewhere only shows
/// up after a remount, which [`Layout`](super::Layout) forces by keying this
/// component on the session epoch.
#[component]
pub fn Navbar(
    theme: ThemeMode,
    #[props(!optional)] selected_category: Option<CategoryId>,
) -> Element {
    let state = use_context::<AppState>();
    let mut nav = use_signal(move || NavState::mount(state.session_store().as_ref()));

    let props = NavProps::new(theme, categories(), login_profile_menus())
        .with_selected(selected_category);
    let view = compose(&nav(), &props);

    let logo_class = match view.logo {
        LogoVariant::Color => "logo",
        LogoVariant::White => "logo logo-white",
    };

    // Pseudo-class colors can't be inline, so hand them to the stylesheet
    let css_vars = format!(
        "--search-text: {}; --search-bg: {}; --search-hover-bg: {}; --search-placeholder: {}; --tab-hover-underline: {};",
        view.search.text_color,
        view.search.background,
        view.search.hover_background,
        view.search.placeholder_color,
        view.tab_hover_underline,
    );

    rsx! {
        div {
            class: "nav-container",
            style: "{css_vars}",

            nav {
                class: "navbar",

                div { class: "nav-left",
                    Link {
                        to: Route::from(view.home),
                        span { class: "{logo_class}", "my little trip" }
                    }

                    div { class: "search-bar",
                        svg {
                            class: "search-icon",
                            width: "16",
                            height: "16",
                            view_box: "0 0 16 16",
                            fill: "none",
                            stroke: "{view.search.icon_color}",
                            stroke_width: "2",
                            circle { cx: "7", cy: "7", r: "5" }
                            line { x1: "11", y1: "11", x2: "15", y2: "15" }
                        }
                        input {
                            r#type: "text",
                            placeholder: "{view.search.placeholder}",
                            onfocus: move |_| nav.write().set_search_focus(true),
                            onblur: move |_| nav.write().set_search_focus(false),
                        }
                    }
                }

                match view.profile {
                    ProfileBar::LoggedIn { entries, text_color, avatar_color, dropdown } => rsx! {
                        div { class: "profile-bar",
                            for entry in entries {
                                p {
                                    key: "{entry.id}",
                                    style: "color: {text_color}",
                                    "{entry.name}"
                                }
                            }

                            div {
                                id: "{dropdown.anchor.as_str()}",
                                class: "profile-image-container",

                                svg {
                                    class: "user-icon",
                                    width: "32",
                                    height: "32",
                                    view_box: "0 0 32 32",
                                    onclick: move |_| nav.write().toggle_profile_menu(),
                                    circle { cx: "16", cy: "16", r: "16", fill: "{avatar_color}" }
                                    circle { cx: "16", cy: "12", r: "5", fill: "white" }
                                    path { d: "M6 26c2-5 6-7 10-7s8 2 10 7", fill: "white" }
                                }

                                ProfileMenu {
                                    visible: dropdown.visible,
                                    anchor: dropdown.anchor.clone(),
                                    on_close: move |_| nav.write().hide_profile_menu(),
                                    on_logout: move |_| nav.write().logout(),
                                }
                            }
                        }
                    },
                    ProfileBar::LoggedOut { links } => rsx! {
                        div { class: "profile-bar logged-out",
                            for link in links {
                                p {
                                    key: "{link.label}",
                                    class: if link.emphasized { "sign-up-button" } else { "" },
                                    style: link_style(&link),
                                    match link.target {
                                        Some(target) => rsx! {
                                            Link { to: Route::from(target), "{link.label}" }
                                        },
                                        None => rsx! { "{link.label}" },
                                    }
                                }
                            }
                        }
                    },
                }
            }

            nav { class: "nav-bottom",
                for tab in view.tabs {
                    div {
                        key: "{tab.id.0}",
                        class: "category-item",
                        p {
                            class: if tab.selected { "selected" } else { "" },
                            style: tab_style(&tab),
                            "{tab.label}"
                        }
                    }
                }
            }
        }
    }
}

fn link_style(link: &NavLink) -> String {
    if link.emphasized {
        format!("color: {0}; border-color: {0}", link.color)
    } else {
        format!("color: {}", link.color)
    }
}

fn tab_style(tab: &TabView) -> String {
    match tab.underline {
        Some(underline) => format!("color: {}; border-bottom-color: {underline}", tab.color),
        None => format!("color: {}", tab.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mytrip_nav::data::FLIGHTS_LABEL;
    use mytrip_nav::{AuthState, CategoryRecord};

    #[test]
    fn test_signup_link_is_outlined() {
        let view = compose(
            &NavState::new(AuthState::LoggedOut),
            &NavProps::new(ThemeMode::Normal, Vec::new(), Vec::new()),
        );
        let ProfileBar::LoggedOut { links } = view.profile else {
            panic!("expected logged-out bar");
        };
        assert_eq!(link_style(&links[0]), "color: #666d75");
        assert_eq!(link_style(&links[2]), "color: #2b96ed; border-color: #2b96ed");
    }

    #[test]
    fn test_selected_tab_gets_underline() {
        let view = compose(
            &NavState::default(),
            &NavProps::new(
                ThemeMode::Transparent,
                vec![CategoryRecord::new(1, FLIGHTS_LABEL), CategoryRecord::new(2, "숙소")],
                Vec::new(),
            ),
        );
        assert_eq!(
            tab_style(&view.tabs[0]),
            "color: white; border-bottom-color: white"
        );
        assert_eq!(tab_style(&view.tabs[1]), "color: rgba(255, 255, 255, 0.7)");
    }
}

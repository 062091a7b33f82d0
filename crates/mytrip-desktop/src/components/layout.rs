//! # Layout Component
//!
//! Main application layout wrapper providing consistent structure.

use dioxus::prelude::*;

use super::Navbar;
use crate::router::Route;
use crate::state::AppState;

/// Main layout wrapper component.
///
/// Renders the navigation bar above the routed page.
///
/// # Structure
///
/// ```text
/// +---------------------------------------------+
/// | logo  [search.............]   menus  (o)    |
/// |        tab  tab  tab  tab                   |
/// |---------------------------------------------|
/// |                                             |
/// |              Main Content                   |
/// |              (Outlet)                       |
/// |                                             |
/// +---------------------------------------------+
/// ```
#[component]
pub fn Layout() -> Element {
    let state = use_context::<AppState>();
    let theme = state.theme;
    let selected_category = state.selected_category;
    let epoch = *state.session_epoch.read();

    rsx! {
        div {
            class: "app-layout",

            // New key on every session change, so the bar remounts and rereads it
            Navbar {
                key: "{epoch}",
                theme,
                selected_category,
            }

            main {
                class: "content",

                Outlet::<Route> {}
            }
        }
    }
}

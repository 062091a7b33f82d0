//! # Profile Menu
//!
//! Dropdown under the avatar in the signed-in navigation bar.

use dioxus::prelude::*;
use mytrip_nav::data::profile_dropdown_menus;
use mytrip_nav::AnchorId;

use crate::state::AppState;

/// Profile dropdown component.
///
/// Positioned relative to the element named by `anchor`. Clicking outside
/// the menu or on an entry closes it through `on_close`. Logging out clears
/// the persisted session flag first and then calls `on_logout` so the bar
/// switches to its signed-out variant.
#[component]
pub fn ProfileMenu(
    visible: bool,
    anchor: AnchorId,
    on_close: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let mut state = use_context::<AppState>();

    if !visible {
        return rsx! {};
    }

    let entries = profile_dropdown_menus();

    let on_logout_click = move |_| {
        state.sign_out();
        on_logout.call(());
    };

    rsx! {
        // Full-window backdrop catches outside clicks
        div {
            class: "profile-menu-backdrop",
            onclick: move |_| on_close.call(()),
        }

        div {
            class: "profile-menu",
            "data-anchor": "{anchor.as_str()}",

            for entry in entries {
                p {
                    key: "{entry.id}",
                    class: "profile-menu-item",
                    onclick: move |_| on_close.call(()),
                    "{entry.name}"
                }
            }

            p {
                class: "profile-menu-item logout",
                onclick: on_logout_click,
                "로그아웃"
            }
        }
    }
}

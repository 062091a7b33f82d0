//! # Home View
//!
//! Landing page under the navigation bar.

use dioxus::prelude::*;
use mytrip_nav::data::categories;

use crate::state::AppState;

/// Home landing view.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    // Subscribe so the greeting follows sign-out
    let _epoch = *state.session_epoch.read();
    let signed_in = state.has_session();

    rsx! {
        div {
            class: "home-view",

            div {
                class: "home-hero",

                h2 { "어디로 떠나볼까요?" }

                p { class: "text-secondary",
                    if signed_in {
                        "다시 오신 것을 환영해요. 다음 여행을 계획해보세요."
                    } else {
                        "로그인하고 나만의 여행을 만들어보세요."
                    }
                }
            }

            div {
                class: "category-grid",

                for category in categories() {
                    div {
                        key: "{category.id.0}",
                        class: "category-card",
                        h3 { "{category.name}" }
                    }
                }
            }
        }
    }
}

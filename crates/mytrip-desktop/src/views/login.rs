//! # Login View
//!
//! Email sign-in form.

use dioxus::prelude::*;

use super::validation::{check_password, normalize_email};
use crate::router::Route;
use crate::state::{issue_token, AppState};

/// Login view component.
///
/// On success a session token is stored and the navigation bar remounts in
/// its signed-in variant.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    // If already signed in, redirect to home
    if state.has_session() {
        nav.push(Route::Home {});
    }

    let mut do_login = move || {
        let email_val = match normalize_email(&email.read()) {
            Ok(email) => email,
            Err(msg) => {
                error.set(Some(msg.to_string()));
                return;
            }
        };

        if let Err(msg) = check_password(&password.read()) {
            error.set(Some(msg.to_string()));
            return;
        }

        error.set(None);
        tracing::info!(email = %email_val, "Login submitted");

        if let Err(e) = state.sign_in(&issue_token()) {
            error.set(Some(format!("로그인 상태를 저장하지 못했어요: {e}")));
            return;
        }
        nav.push(Route::Home {});
    };

    rsx! {
        div { class: "login-view",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { "로그인" }
                    p { class: "text-secondary", "my little trip에 오신 것을 환영해요" }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "email", "이메일" }
                        input {
                            id: "email",
                            r#type: "email",
                            placeholder: "example@mytrip.com",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value().clone()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "비밀번호" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value().clone()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        onclick: move |_| do_login(),
                        "로그인"
                    }

                    p { class: "login-hint text-secondary",
                        "아직 회원이 아니신가요? "
                        Link { to: Route::Signup {}, "회원가입" }
                    }
                }
            }
        }
    }
}

//! # Signup View
//!
//! Account creation form.

use dioxus::prelude::*;

use super::validation::{check_password, normalize_email};
use crate::router::Route;
use crate::state::{issue_token, AppState};

/// Signup view component.
///
/// Creating an account signs the user in right away.
#[component]
pub fn Signup() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    if state.has_session() {
        nav.push(Route::Home {});
    }

    let mut do_signup = move || {
        let name_val = name.read().trim().to_string();
        if name_val.is_empty() {
            error.set(Some("이름을 입력해주세요".to_string()));
            return;
        }

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

        if *password.read() != *confirm.read() {
            error.set(Some("비밀번호가 일치하지 않아요".to_string()));
            return;
        }

        error.set(None);
        tracing::info!(name = %name_val, email = %email_val, "Account created");

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
                    h1 { "회원가입" }
                    p { class: "text-secondary", "가입하고 여행 혜택을 받아보세요" }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "name", "이름" }
                        input {
                            id: "name",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value().clone()),
                        }
                    }

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
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "confirm", "비밀번호 확인" }
                        input {
                            id: "confirm",
                            r#type: "password",
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value().clone()),
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        onclick: move |_| do_signup(),
                        "가입하기"
                    }

                    p { class: "login-hint text-secondary",
                        "이미 회원이신가요? "
                        Link { to: Route::Login {}, "로그인" }
                    }
                }
            }
        }
    }
}

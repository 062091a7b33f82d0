//! # State
//!
//! Application-wide state shared through Dioxus context.

mod app_state;
mod session;

pub use app_state::{issue_token, AppState};

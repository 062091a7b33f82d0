//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;
use mytrip_nav::NavTarget;

use crate::components::Layout;
use crate::views::{Home, Login, Signup};

/// Application routes.
///
/// All routes are wrapped in the [`Layout`] component which renders the
/// navigation bar above the page.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    /// Main layout wrapper for all routes.
    #[layout(Layout)]
    /// Landing page.
    #[route("/")]
    Home {},

    /// Sign in.
    #[route("/login")]
    Login {},

    /// Create an account.
    #[route("/signup")]
    Signup {},
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Login => Route::Login {},
            NavTarget::Signup => Route::Signup {},
        }
    }
}

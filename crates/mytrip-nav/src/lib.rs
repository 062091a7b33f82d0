//! Navigation bar core for My Little Trip.
//!
//! This crate holds everything about the travel site's top bar that does
//! not depend on a UI framework:
//!
//! - [`session`] - the persisted session flag and its one-shot reader
//! - [`state`] - profile menu, search focus and login flags
//! - [`compose`] - the pure state-to-view-model function
//! - [`theme`] - palette selection
//! - [`data`] - built-in category and menu lists
//! - [`route`] - outbound navigation targets

pub mod compose;
pub mod data;
mod error;
pub mod route;
pub mod session;
pub mod state;
pub mod theme;

pub use compose::{compose, AnchorId, NavProps, NavView, ProfileBar, TabView};
pub use data::{CategoryId, CategoryRecord, ProfileMenuEntry};
pub use error::{NavError, Result};
pub use route::NavTarget;
pub use session::{
    read_auth_state, FileSessionStore, MemorySessionStore, SessionStore, SESSION_KEY,
};
pub use state::{AuthState, NavState, ProfileMenuVisibility, SearchFocusState};
pub use theme::{LogoVariant, Palette, ThemeMode};

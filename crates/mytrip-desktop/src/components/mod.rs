//! # UI Components
//!
//! Reusable UI components for the desktop application.
//!
//! - [`Layout`] - Main application layout wrapper
//! - [`Navbar`] - Top navigation bar
//! - [`ProfileMenu`] - Avatar dropdown

mod layout;
mod navbar;
mod profile_menu;

pub use layout::Layout;
pub use navbar::Navbar;
pub use profile_menu::ProfileMenu;

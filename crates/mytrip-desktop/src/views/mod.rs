//! # Views
//!
//! Page-level view components.
//!
//! - [`Home`] - Landing page
//! - [`Login`] - Email sign-in
//! - [`Signup`] - Account creation

mod home;
mod login;
mod signup;
mod validation;

pub use home::Home;
pub use login::Login;
pub use signup::Signup;

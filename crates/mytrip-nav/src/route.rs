//! Outbound navigation targets declared by the bar.

/// A destination the bar links to. Routing itself lives in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Login,
    Signup,
}

impl NavTarget {
    /// Returns the route path of the target.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(NavTarget::Home.path(), "/");
        assert_eq!(NavTarget::Login.path(), "/login");
        assert_eq!(NavTarget::Signup.path(), "/signup");
    }
}

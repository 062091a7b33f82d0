//! Error types for the navigation core.

use thiserror::Error;

/// Errors that can occur in the navigation core.
///
/// None of these ever reach the rendered bar: the session reader folds
/// every failure into "logged out".
#[derive(Debug, Error)]
pub enum NavError {
    /// Reading or writing the session file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file is not a JSON object of strings.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A theme name that is not one of the known palettes.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}

/// Result type for navigation core operations.
pub type Result<T> = std::result::Result<T, NavError>;

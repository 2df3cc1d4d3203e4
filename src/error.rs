//! Error types for the Hobbyverse engine

/// Errors reported to the presentation layer
#[derive(Debug, thiserror::Error)]
pub enum HobbyError {
    #[error("No challenge at position {index} in today's set")]
    NotFound { index: usize },

    #[error("No rerolls left")]
    NoRerollsLeft,

    #[error("Profile setup incomplete: {0}")]
    ProfileIncomplete(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Incorrect password")]
    InvalidCredentials,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Cannot {action} while in {state} step")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Corrupt record: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HobbyError>;

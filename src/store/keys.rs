//! Storage key layout

/// Prefix for profile records
pub const USER_PREFIX: &str = "hobbyverse_user_";

/// Prefix for progression records
pub const GAME_PREFIX: &str = "hobbyverse_game_";

/// Emails are identities: trimmed and compared case-insensitively
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn user_key(email: &str) -> String {
    format!("{}{}", USER_PREFIX, normalize_email(email))
}

pub fn game_key(email: &str) -> String {
    format!("{}{}", GAME_PREFIX, normalize_email(email))
}

//! User profiles, accounts and the profile setup wizard
//!
//! The profile is owned by the account layer; the engine only reads the
//! hobby list from it.

mod account;
mod setup;

pub use account::{complete_setup, load_profile, login, signup, LoginOutcome};
pub use setup::{FinishedSetup, ProfileSetup, SetupStep};

use serde::{Deserialize, Serialize};

use crate::store::normalize_email;

/// Hobbies required before daily challenges are available
pub const DEFAULT_MIN_HOBBIES: usize = 3;

/// Identity of a user across every engine call (normalized email)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(email: &str) -> Self {
        Self(normalize_email(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stored profile record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    /// Stored as entered; this profile store is not hardened
    pub password: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub hobbies: Vec<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl UserProfile {
    /// Whether avatar, username and enough hobbies have been chosen
    pub fn is_setup_complete(&self, min_hobbies: usize) -> bool {
        self.missing_setup(min_hobbies).is_none()
    }

    /// Describe the first missing setup item, if any
    pub fn missing_setup(&self, min_hobbies: usize) -> Option<String> {
        if self.avatar.as_deref().is_none_or(|a| a.trim().is_empty()) {
            return Some("no avatar selected".to_string());
        }
        if self.hobbies.len() < min_hobbies {
            return Some(format!(
                "{} of {} required hobbies selected",
                self.hobbies.len(),
                min_hobbies
            ));
        }
        if self.username.as_deref().is_none_or(|u| u.trim().is_empty()) {
            return Some("no username chosen".to_string());
        }
        None
    }

    /// Name shown in the dashboard header
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.name)
    }
}

//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::profile::DEFAULT_MIN_HOBBIES;

/// General settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Rerolls granted when a profile finishes setup
    #[serde(default = "default_starting_rerolls")]
    pub starting_rerolls: u32,

    /// Hobbies a user must pick before daily challenges unlock
    #[serde(default = "default_min_hobbies")]
    pub min_hobbies: usize,

    /// Default log filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Storage settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Database file (defaults to ~/.hobbyverse/hobbyverse.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

fn default_starting_rerolls() -> u32 {
    1
}

fn default_min_hobbies() -> usize {
    DEFAULT_MIN_HOBBIES
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_rerolls: default_starting_rerolls(),
            min_hobbies: default_min_hobbies(),
            log_level: default_log_level(),
        }
    }
}

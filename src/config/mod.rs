//! Configuration loading and management

mod io;
mod settings;

pub use io::write_locked;
pub use settings::{Settings, StorageSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.hobbyverse/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Progression and logging settings
    #[serde(default)]
    pub settings: Settings,

    /// Where records are stored
    #[serde(default)]
    pub storage: StorageSettings,
}

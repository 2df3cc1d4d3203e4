//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use hobbyverse::config::{write_locked, Config};

/// Default configuration content for hobbyverse init
pub const DEFAULT_CONFIG: &str = r#"# Hobbyverse Configuration
# ========================

# ============================================================================
# SETTINGS
# ============================================================================
#
# Available options:
#   starting_rerolls - Rerolls granted to a new or freshly set-up profile (default: 1)
#   min_hobbies      - Hobbies a profile needs before challenges unlock (default: 3)
#   log_level        - Log filter when RUST_LOG is unset (default: "info")

[settings]
starting_rerolls = 1
min_hobbies = 3
log_level = "info"

# ============================================================================
# STORAGE
# ============================================================================
#
# Profiles and progression records live in a single SQLite file.
# Defaults to ~/.hobbyverse/hobbyverse.db when unset.

[storage]
# db_path = "/path/to/hobbyverse.db"
"#;

/// Initialize a new Hobbyverse configuration
/// By default creates the global config at ~/.hobbyverse/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_locked(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}

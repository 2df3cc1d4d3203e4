//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

impl Config {
    /// Get the global config directory path (~/.hobbyverse/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hobbyverse")
    }

    /// Get the global config file path (~/.hobbyverse/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Default database location (~/.hobbyverse/hobbyverse.db)
    pub fn default_db_path() -> PathBuf {
        Self::global_config_dir().join("hobbyverse.db")
    }

    /// Database path from the config, or the default location
    pub fn db_path(&self) -> PathBuf {
        self.storage
            .db_path
            .clone()
            .unwrap_or_else(Self::default_db_path)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration from `path` (or the global config path).
    ///
    /// A missing file is not an error: defaults are returned instead.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Write the configuration as TOML (see [`write_locked`])
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Could not encode config as TOML")?;
        write_locked(path, &content)
    }
}

/// Replace `path` with `content` while holding `<path>.lock`.
///
/// The content lands in a sibling `.tmp` file first and is renamed over the
/// target, so readers see either the old or the new file.
pub fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Could not create {}", dir.display()))?;
    }

    let guard = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(sibling(path, "lock"))
        .with_context(|| format!("Could not open lock for {}", path.display()))?;
    guard
        .lock_exclusive()
        .with_context(|| format!("Could not lock {}", path.display()))?;

    let staged = sibling(path, "tmp");
    let mut file = File::create(&staged)
        .with_context(|| format!("Could not stage {}", staged.display()))?;
    file.write_all(content.as_bytes())
        .and_then(|_| file.sync_all())
        .with_context(|| format!("Could not write {}", staged.display()))?;

    std::fs::rename(&staged, path)
        .with_context(|| format!("Could not replace {}", path.display()))?;

    // `guard` unlocks on drop
    Ok(())
}

/// `config.toml` -> `config.toml.<suffix>`
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

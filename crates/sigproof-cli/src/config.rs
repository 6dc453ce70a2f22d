//! CLI configuration — read/write `~/.sigproof/config.toml`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Persisted CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Request files verified by `sigproof verify` when no paths are given.
    pub requests: Vec<PathBuf>,
    /// Fail with a non-zero exit status when any signature is invalid.
    pub strict:   bool,
}

/// Return the default path for the CLI config file (`~/.sigproof/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_owned());
    PathBuf::from(home).join(".sigproof").join("config.toml")
}

/// Write `cfg` to `path`, creating parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn save_config(cfg: &CliConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string(cfg)?)?;
    Ok(())
}

/// Load and deserialize a [`CliConfig`] from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or deserialized.
pub fn load_config(path: &Path) -> Result<CliConfig> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}

/// Load the configuration at `path`, falling back to defaults when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or deserialized.
pub fn load_config_or_default(path: &Path) -> Result<CliConfig> {
    if path.exists() {
        debug!("using config {}", path.display());
        load_config(path)
    } else {
        debug!("no config at {}, using defaults", path.display());
        Ok(CliConfig::default())
    }
}

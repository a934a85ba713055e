//! Config file handling for scorefeedctl.
//!
//! The feed configuration lives as JSON under the platform config
//! directory; a missing or unreadable file falls back to defaults so the
//! CLI always starts.

use std::path::{Path, PathBuf};

use anyhow::Context;
use scorefeed_core::FeedConfig;
use tracing::warn;

const APP_DIR: &str = "scorefeedctl";
const CONFIG_FILE: &str = "config.json";

/// Where the config file lives, `None` on platforms without a config
/// directory.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load the stored configuration, falling back to defaults.
pub fn load() -> FeedConfig {
    match config_path() {
        Some(path) if path.exists() => load_from(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "unreadable config, using defaults");
            FeedConfig::default()
        }),
        _ => FeedConfig::default(),
    }
}

pub fn load_from(path: &Path) -> anyhow::Result<FeedConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Persist the configuration to the platform config directory.
pub fn save(config: &FeedConfig) -> anyhow::Result<()> {
    let path = config_path().context("no config directory on this platform")?;
    save_to(config, &path)
}

pub fn save_to(config: &FeedConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

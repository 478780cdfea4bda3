//! Loading and saving widget configuration

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use progress_bar_types::ProgressBarConfig;

/// File name of the default configuration
const CONFIG_FILE: &str = "progress-bar.json";

/// Get the default configuration file path
pub fn config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "github.progress_bar", "progress-bar")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(dirs.config_dir().join(CONFIG_FILE))
}

/// Load configuration from the default path, falling back to defaults when
/// no file exists yet
pub fn load() -> Result<ProgressBarConfig> {
    let path = config_path()?;

    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Ok(ProgressBarConfig::default());
    }

    load_from_path(&path)
}

/// Save configuration to the default path
pub fn save(config: &ProgressBarConfig) -> Result<()> {
    save_to_path(config, &config_path()?)
}

/// Load configuration from a specific file path
pub fn load_from_path(path: &Path) -> Result<ProgressBarConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save configuration to a specific file path
pub fn save_to_path(config: &ProgressBarConfig, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    log::debug!("Saved config to {}", path.display());
    Ok(())
}

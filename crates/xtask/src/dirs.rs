//! Platform-specific directory utilities

use anyhow::Result;
use std::path::{Path, PathBuf};

use survivor_core::GameConfig;
use survivor_content::ConfigLoader;

/// Environment variable pointing at a config TOML file.
pub const CONFIG_ENV: &str = "SURVIVOR_CONFIG";

/// Get the platform-specific config directory for the survivor client
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/survivor`
/// - Linux: `~/.config/survivor` (or `$XDG_CONFIG_HOME/survivor`)
/// - Windows: `%APPDATA%\survivor\config`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "survivor").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Resolve which config file to use.
///
/// Order: explicit `--config`, then `$SURVIVOR_CONFIG`, then `game.toml` in
/// the platform config directory if it exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    config_dir()
        .map(|dir| dir.join("game.toml"))
        .filter(|path| path.exists())
}

/// Load the game config following [`resolve_config_path`], defaulting when none is found.
pub fn load_config(explicit: Option<&Path>) -> Result<GameConfig> {
    let path = resolve_config_path(explicit);
    if let Some(path) = &path {
        tracing::info!(path = %path.display(), "using config file");
    }
    ConfigLoader::load_or_default(path.as_deref())
}

//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-repo-search/`, `~/.cache/gh-repo-search/`
//! - macOS: `~/Library/Application Support/gh-repo-search/`, `~/Library/Caches/gh-repo-search/`
//! - Windows: `%APPDATA%\gh-repo-search\`, `%LOCALAPPDATA%\gh-repo-search\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "gh-repo-search";

/// Get the application config directory
/// Returns ~/.config/gh-repo-search/ on Linux, ~/Library/Application Support/gh-repo-search/ on macOS
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get the application cache directory, creating it if needed
/// Returns ~/.cache/gh-repo-search/ on Linux, ~/Library/Caches/gh-repo-search/ on macOS
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_name() {
        let dir = config_dir().unwrap();
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_app_config_path() {
        let path = app_config_path().unwrap();
        assert!(path.ends_with("config.toml"));
    }
}

use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".gh-repo-search.toml";

/// Load config file content
///
/// Searches for the config file in:
/// 1. Current working directory as .gh-repo-search.toml
/// 2. Home directory as .gh-repo-search.toml
/// 3. Application config directory as config.toml
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];

    if let Some(home) = env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(CONFIG_FILE));
    }

    match crate::paths::app_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => log::debug!("No application config directory: {}", e),
    }

    paths
}

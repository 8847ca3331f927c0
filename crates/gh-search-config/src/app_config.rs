//! Application configuration
//!
//! Configuration loaded from .gh-repo-search.toml file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .gh-repo-search.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API base URL; the GraphQL endpoint is `<api_url>/graphql`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// GitHub host used to look up a token with `gh auth token`
    #[serde(default = "default_host")]
    pub host: String,

    /// Bearer token; GITHUB_TOKEN, GH_TOKEN and `gh` are used when unset
    #[serde(default)]
    pub token: Option<String>,

    /// Rows per page on startup (10, 20, 30, 40 or 50)
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Seconds before a search request is abandoned
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Seconds a transient notice (e.g. input validation) stays visible
    #[serde(default = "default_notice_duration_secs")]
    pub notice_duration_secs: u64,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_host() -> String {
    "github.com".to_string()
}

fn default_page_size() -> u32 {
    10
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_notice_duration_secs() -> u64 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            host: default_host(),
            token: None,
            default_page_size: default_page_size(),
            request_timeout_secs: default_request_timeout_secs(),
            notice_duration_secs: default_notice_duration_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, "https://api.github.com");
        assert_eq!(config.host, "github.com");
        assert_eq!(config.token, None);
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.notice_duration(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            api_url = "https://ghe.example.com/api"
            host = "ghe.example.com"
            default_page_size = 30
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.api_url, "https://ghe.example.com/api");
        assert_eq!(config.host, "ghe.example.com");
        assert_eq!(config.default_page_size, 30);
        // Unset fields use defaults
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            notice_duration_secs = 2
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.notice_duration(), Duration::from_secs(2));
        assert_eq!(config.api_url, "https://api.github.com");
    }
}

//! Bearer token resolution
//!
//! The token is supplied from outside the application; this module only
//! knows where to look for it.

use crate::DEFAULT_HOST;
use anyhow::{Context, Result};
use log::debug;

/// Resolves the GitHub token used for search requests
///
/// Tries multiple sources in order:
/// 1. Explicit token (from the config file)
/// 2. `GITHUB_TOKEN` or `GH_TOKEN` env var
/// 3. `gh auth token --hostname {host}` command
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Token from the config file, takes precedence over everything
    explicit_token: Option<String>,
    /// Cached token from GITHUB_TOKEN/GH_TOKEN
    env_token: Option<String>,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new(None)
    }
}

impl TokenResolver {
    /// Create a new token resolver
    pub fn new(explicit_token: Option<String>) -> Self {
        let env_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok();

        Self::with_sources(explicit_token, env_token)
    }

    fn with_sources(explicit_token: Option<String>, env_token: Option<String>) -> Self {
        Self {
            explicit_token: explicit_token.filter(|t| !t.trim().is_empty()),
            env_token: env_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Token available without spawning `gh`, if any
    pub fn static_token(&self) -> Option<&str> {
        self.explicit_token
            .as_deref()
            .or(self.env_token.as_deref())
    }

    /// Get a token for the given host
    ///
    /// # Arguments
    ///
    /// * `host` - The GitHub host (None = github.com), only used for `gh auth token`
    pub async fn get_token(&self, host: Option<&str>) -> Result<String> {
        if let Some(token) = self.static_token() {
            debug!("Using token from config or environment");
            return Ok(token.to_string());
        }

        let host = host.unwrap_or(DEFAULT_HOST);
        debug!("Trying gh auth token for host {}", host);
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token", "--hostname", host])
            .output()
            .await
            .context("Failed to run 'gh auth token'")?;

        if output.status.success() {
            let token = String::from_utf8(output.stdout)
                .context("Invalid UTF-8 in gh auth token output")?
                .trim()
                .to_string();
            if !token.is_empty() {
                debug!("Using token from gh CLI for host {}", host);
                return Ok(token);
            }
        }

        Err(anyhow::anyhow!(
            "No token found for host '{}'. \
             Set GITHUB_TOKEN or run 'gh auth login --hostname {}'",
            host,
            host
        ))
    }
}

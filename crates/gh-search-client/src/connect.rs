//! Construction of the production client stack

use crate::auth::TokenResolver;
use crate::octocrab_client::OctocrabSearchClient;
use crate::timeout_client::{TimeoutSearchClient, DEFAULT_TIMEOUT};
use crate::{DEFAULT_API_URL, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::info;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use std::sync::Arc;
use std::time::Duration;

/// Settings needed to build a search client
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// API base URL (e.g., `https://api.github.com` or `https://ghe.example.com/api`)
    pub api_url: String,
    /// Host passed to `gh auth token`
    pub host: String,
    /// Token override; environment and `gh` are consulted when absent
    pub token: Option<String>,
    /// Upper bound for a single fetch
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            host: DEFAULT_HOST.to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Build an authenticated, timeout-bounded search client
///
/// Retries are disabled: every fetch is exactly one round trip.
pub async fn connect(settings: &ClientSettings) -> Result<TimeoutSearchClient<OctocrabSearchClient>> {
    info!("Creating search client for {}", settings.api_url);

    let token = TokenResolver::new(settings.token.clone())
        .get_token(Some(&settings.host))
        .await?;

    let octocrab = Octocrab::builder()
        .personal_token(token)
        .add_retry_config(RetryConfig::None)
        .base_uri(settings.api_url.as_str())
        .context("Failed to set base URI")?
        .build()
        .context("Failed to build Octocrab client")?;

    let client = TimeoutSearchClient::new(
        OctocrabSearchClient::new(Arc::new(octocrab)),
        settings.timeout,
    );

    info!(
        "Search client created for {} (timeout {:?})",
        settings.host, settings.timeout
    );
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = ClientSettings::default();
        assert_eq!(settings.api_url, "https://api.github.com");
        assert_eq!(settings.host, "github.com");
        assert_eq!(settings.token, None);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn test_connect_with_explicit_token() {
        let settings = ClientSettings {
            token: Some("test-token".to_string()),
            timeout: Duration::from_secs(3),
            ..ClientSettings::default()
        };

        let client = connect(&settings).await.unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }
}

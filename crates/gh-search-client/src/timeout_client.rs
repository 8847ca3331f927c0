//! Timeout-bounded search client (decorator pattern)
//!
//! Wraps any `SearchClient` implementation so that every fetch settles:
//! a request that does not answer in time becomes `FetchError::Timeout`.

use crate::client::SearchClient;
use crate::error::FetchError;
use crate::types::{Page, PageRequest};
use async_trait::async_trait;
use log::warn;
use std::time::Duration;

/// Default time a single fetch may take
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Search client decorator that bounds each request in time
///
/// The inner request is dropped when the deadline passes, its eventual
/// response is never observed.
///
/// # Example
///
/// ```rust,ignore
/// use gh_search_client::{OctocrabSearchClient, TimeoutSearchClient};
/// use std::time::Duration;
///
/// let octocrab = std::sync::Arc::new(octocrab::Octocrab::builder().build().unwrap());
/// let client = TimeoutSearchClient::new(
///     OctocrabSearchClient::new(octocrab),
///     Duration::from_secs(10),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TimeoutSearchClient<C: SearchClient> {
    inner: C,
    timeout: Duration,
}

impl<C: SearchClient> TimeoutSearchClient<C> {
    /// Create a new timeout-bounded client
    ///
    /// # Arguments
    ///
    /// * `inner` - The inner client to delegate fetches to
    /// * `timeout` - Maximum duration of a single fetch
    pub fn new(inner: C, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Get the configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get a reference to the inner client
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: SearchClient> SearchClient for TimeoutSearchClient<C> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FetchError> {
        match tokio::time::timeout(self.timeout, self.inner.fetch_page(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Search for {:?} timed out after {:?}",
                    request.query, self.timeout
                );
                Err(FetchError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Client that answers with an empty page after a fixed delay
    struct DelayedClient {
        delay: Duration,
    }

    #[async_trait]
    impl SearchClient for DelayedClient {
        async fn fetch_page(&self, _request: &PageRequest) -> Result<Page, FetchError> {
            tokio::time::sleep(self.delay).await;
            Ok(Page {
                items: vec![],
                total_count: 0,
                end_cursor: None,
                has_next_page: false,
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fast_response_passes_through() {
        let client = TimeoutSearchClient::new(
            DelayedClient {
                delay: Duration::from_secs(1),
            },
            Duration::from_secs(5),
        );

        let page = client
            .fetch_page(&PageRequest::first("rust", 10))
            .await
            .unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_response_times_out() {
        let client = TimeoutSearchClient::new(
            DelayedClient {
                delay: Duration::from_secs(60),
            },
            Duration::from_secs(5),
        );

        let result = client.fetch_page(&PageRequest::first("rust", 10)).await;
        assert_eq!(result, Err(FetchError::Timeout(Duration::from_secs(5))));
    }
}

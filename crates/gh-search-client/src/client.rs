//! Search client trait
//!
//! This module defines the core `SearchClient` trait that all client
//! implementations must satisfy.

use crate::error::FetchError;
use crate::types::{Page, PageRequest};
use async_trait::async_trait;

/// Repository search client trait
///
/// Defines the interface for fetching repository search pages.
/// Implementations can be direct (hitting the API) or decorated
/// with timeouts, recording, etc.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_search_client::{PageRequest, SearchClient};
///
/// async fn count(client: &dyn SearchClient) -> Result<u64, gh_search_client::FetchError> {
///     let page = client.fetch_page(&PageRequest::first("language:rust", 10)).await?;
///     Ok(page.total_count)
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetch one page of repositories matching the request
    ///
    /// Performs exactly one round trip and never retries.
    ///
    /// # Arguments
    ///
    /// * `request` - Query string, page size and optional cursor
    ///
    /// # Returns
    ///
    /// The page of repositories with pagination info, or the reason it
    /// could not be fetched.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FetchError>;
}

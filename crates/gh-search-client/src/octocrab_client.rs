//! Octocrab-based search client
//!
//! Direct implementation of the `SearchClient` trait using the octocrab library.
//! This client makes real API calls without any timeout of its own.

use crate::client::SearchClient;
use crate::error::FetchError;
use crate::types::{Page, PageRequest};
use crate::wire::{parse_search_response, SearchRequestBody, GRAPHQL_ROUTE};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub GraphQL search client using octocrab
///
/// This is the base implementation that makes actual API calls.
/// It can be wrapped by `TimeoutSearchClient` to bound request time.
#[derive(Debug, Clone)]
pub struct OctocrabSearchClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabSearchClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl SearchClient for OctocrabSearchClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Page, FetchError> {
        debug!(
            "Searching repositories: query={:?} count={} after={:?}",
            request.query,
            request.page_size,
            request.cursor.as_ref().map(|c| c.as_str())
        );

        let body = SearchRequestBody::new(request);

        // Raw POST so the status code is ours to interpret
        let response = self
            .octocrab
            ._post(GRAPHQL_ROUTE, Some(&body))
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if let Some(error) = FetchError::from_status(response.status().as_u16()) {
            debug!("Search request rejected: {}", error);
            return Err(error);
        }

        let text = self
            .octocrab
            .body_to_string(response)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let page = parse_search_response(&text)?;
        debug!(
            "Fetched {} of {} repositories (has_next_page={})",
            page.items.len(),
            page.total_count,
            page.has_next_page
        );
        Ok(page)
    }
}

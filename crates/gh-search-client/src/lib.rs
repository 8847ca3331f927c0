//! GitHub repository search client
//!
//! This crate provides a trait-based client for the GitHub GraphQL search
//! endpoint. The design follows the decorator pattern, allowing timeout
//! behavior to be composed with the base client.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              SearchClient trait                  │
//! │  - fetch_page()                                  │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌──────────────────────┐    ┌─────────────────────┐
//! │ OctocrabSearchClient │    │ TimeoutSearchClient │
//! │ (direct API)         │◄───│ (decorator)         │
//! └──────────────────────┘    └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_search_client::{connect, ClientSettings, PageRequest, SearchClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = connect(&ClientSettings::default()).await?;
//!
//! let page = client
//!     .fetch_page(&PageRequest::first("tokio sort:stars-desc", 10))
//!     .await?;
//! println!("{} repositories", page.total_count);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod connect;
pub mod error;
pub mod octocrab_client;
pub mod timeout_client;
pub mod types;
pub mod wire;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

/// Default API base URL (public GitHub)
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use auth::TokenResolver;
pub use client::SearchClient;
pub use connect::{connect, ClientSettings};
pub use error::FetchError;
pub use octocrab_client::OctocrabSearchClient;
pub use timeout_client::TimeoutSearchClient;
pub use types::{Cursor, Page, PageRequest, RepositoryId, RepositoryItem};

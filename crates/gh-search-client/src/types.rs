//! Repository search data transfer objects
//!
//! These types represent the data returned from the GitHub search API.
//! They are intentionally separate from the wire format in [`crate::wire`]
//! so that nullable GraphQL shapes never leak into the application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque GraphQL node id of a repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryId(String);

impl RepositoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque pagination token handed out by the server
///
/// Only valid for the query that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A repository returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryItem {
    /// GraphQL node id
    pub id: RepositoryId,

    /// Repository name (without owner)
    pub name: String,

    /// Primary language, if GitHub detected one
    pub primary_language: Option<String>,

    /// Languages used in the repository (at most 10)
    pub languages: Vec<String>,

    /// Number of forks
    pub fork_count: u64,

    /// Number of stargazers
    pub star_count: u64,

    /// When the repository was last updated
    pub updated_at: DateTime<Utc>,

    /// Repository description
    pub description: Option<String>,

    /// License name (e.g., "MIT License")
    pub license: Option<String>,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Repositories on this page, in server order
    pub items: Vec<RepositoryItem>,

    /// Total number of matching repositories
    pub total_count: u64,

    /// Cursor pointing after the last item of this page
    pub end_cursor: Option<Cursor>,

    /// Whether the server has another page after this one
    pub has_next_page: bool,
}

/// Parameters of a single page fetch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Search query in GitHub search syntax (including any `sort:` qualifier)
    pub query: String,

    /// Number of items per page
    pub page_size: u32,

    /// Cursor to continue after; `None` requests the first page
    pub cursor: Option<Cursor>,
}

impl PageRequest {
    pub fn new(query: impl Into<String>, page_size: u32, cursor: Option<Cursor>) -> Self {
        Self {
            query: query.into(),
            page_size,
            cursor,
        }
    }

    /// Request for the first page of a query
    pub fn first(query: impl Into<String>, page_size: u32) -> Self {
        Self::new(query, page_size, None)
    }
}

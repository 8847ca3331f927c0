//! Errors returned by search clients

use std::time::Duration;
use thiserror::Error;

/// Failure of a single page fetch
///
/// None of these are fatal: the caller records the message and waits for the
/// user to trigger a new request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure (DNS, TLS, connection reset, ...)
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Token missing, expired or rejected
    #[error("unauthorized: check GITHUB_TOKEN or run 'gh auth login'")]
    Unauthorized,

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    Decode(String),

    /// GraphQL reported errors and returned no data
    #[error("GitHub API error: {0}")]
    Api(String),

    /// No response within the configured time
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl FetchError {
    /// Map an HTTP status code to an error, `None` for success codes
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(FetchError::Unauthorized),
            status => Some(FetchError::Http { status }),
        }
    }
}

//! Session errors

use gh_search_client::RepositoryId;
use thiserror::Error;

/// User input rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("search term must be at least {min} characters")]
    TermTooShort { min: usize },
}

/// Selection of an item that is not part of the current results
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("repository {0} is not in the current results")]
pub struct InvalidSelection(pub RepositoryId);

/// Page size outside the supported set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size {0} is not one of 10, 20, 30, 40, 50")]
pub struct InvalidPageSize(pub u32);

/// Errors a session event can be rejected with
///
/// The session is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    InvalidSelection(#[from] InvalidSelection),
}

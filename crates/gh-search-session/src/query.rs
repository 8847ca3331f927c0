//! Search query construction

use crate::error::ValidationError;
use crate::sort::{SortColumn, SortDirection};
use std::fmt;

/// Minimum number of characters of a trimmed search term
pub const MIN_TERM_LENGTH: usize = 2;

/// A validated query in GitHub search syntax
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    term: String,
    text: String,
}

impl SearchQuery {
    /// Compose the query text from an already validated term
    pub(crate) fn compose(
        term: &str,
        sort_column: Option<SortColumn>,
        sort_direction: SortDirection,
    ) -> Self {
        let text = match sort_column {
            Some(column) => format!(
                "{} sort:{}-{}",
                term,
                column.as_qualifier(),
                sort_direction.as_qualifier()
            ),
            None => term.to_string(),
        };

        Self {
            term: term.to_string(),
            text,
        }
    }

    /// The trimmed search term without qualifiers
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Full query text sent to the server
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Build a search query from user input
///
/// The term is trimmed and must keep at least [`MIN_TERM_LENGTH`] characters.
/// A sort column appends a `sort:<column>-<direction>` qualifier, without one
/// the server's default (best match) ordering applies.
pub fn build_query(
    term: &str,
    sort_column: Option<SortColumn>,
    sort_direction: SortDirection,
) -> Result<SearchQuery, ValidationError> {
    let term = term.trim();
    if term.chars().count() < MIN_TERM_LENGTH {
        return Err(ValidationError::TermTooShort {
            min: MIN_TERM_LENGTH,
        });
    }

    Ok(SearchQuery::compose(term, sort_column, sort_direction))
}

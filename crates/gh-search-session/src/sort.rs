//! Sort order of search results

/// Column the server sorts results by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Stars,
    Forks,
    Updated,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::Stars, SortColumn::Forks, SortColumn::Updated];

    /// Name used in the `sort:` search qualifier
    pub fn as_qualifier(&self) -> &'static str {
        match self {
            Self::Stars => "stars",
            Self::Forks => "forks",
            Self::Updated => "updated",
        }
    }

    /// Get the display label for this column
    pub fn label(&self) -> &'static str {
        match self {
            Self::Stars => "Stars",
            Self::Forks => "Forks",
            Self::Updated => "Updated",
        }
    }
}

/// Direction of the sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Suffix used in the `sort:` search qualifier
    pub fn as_qualifier(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_direction_is_descending() {
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SortDirection::Descending.toggled(), SortDirection::Ascending);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    }

    #[test]
    fn test_qualifiers() {
        let names: Vec<_> = SortColumn::ALL.iter().map(|c| c.as_qualifier()).collect();
        assert_eq!(names, ["stars", "forks", "updated"]);
        assert_eq!(SortDirection::Ascending.as_qualifier(), "asc");
        assert_eq!(SortDirection::Descending.as_qualifier(), "desc");
    }
}

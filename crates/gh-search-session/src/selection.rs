//! Selected repository for the details panel

use crate::error::InvalidSelection;
use gh_search_client::{RepositoryId, RepositoryItem};

/// Reference to one item of the current results
///
/// Stores a position into the result slice it was made against; the owner
/// must call [`Selection::on_results_replaced`] whenever that slice changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    /// Select the item with the given id
    pub fn select(
        &mut self,
        results: &[RepositoryItem],
        id: &RepositoryId,
    ) -> Result<(), InvalidSelection> {
        match results.iter().position(|item| &item.id == id) {
            Some(index) => {
                self.index = Some(index);
                Ok(())
            }
            None => Err(InvalidSelection(id.clone())),
        }
    }

    pub fn on_results_replaced(&mut self) {
        self.index = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn selected_in<'a>(&self, results: &'a [RepositoryItem]) -> Option<&'a RepositoryItem> {
        self.index.and_then(|index| results.get(index))
    }

    /// Id of the item `offset` rows away from the selection
    ///
    /// Without a selection, moving down starts at the first row and moving up
    /// at the last. The target is clamped to the result bounds.
    pub fn neighbor<'a>(
        &self,
        results: &'a [RepositoryItem],
        offset: isize,
    ) -> Option<&'a RepositoryId> {
        if results.is_empty() {
            return None;
        }

        let last = results.len() - 1;
        let target = match self.index {
            Some(index) => index.saturating_add_signed(offset).min(last),
            None if offset < 0 => last,
            None => 0,
        };

        results.get(target).map(|item| &item.id)
    }
}

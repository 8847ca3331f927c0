//! Pagination arithmetic for the result footer

use crate::page_size::PageSize;

/// Page count and the 1-based range of items shown on the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub total_pages: u64,
    pub start_index: u64,
    pub end_index: u64,
}

impl PageWindow {
    /// Derive the window for a page of a result set
    ///
    /// All values are zero when there are no results.
    pub fn derive(total_count: u64, page_size: u32, current_page: u32) -> Self {
        if total_count == 0 || page_size == 0 {
            return Self::default();
        }

        let size = u64::from(page_size);
        let page = u64::from(current_page.max(1));

        Self {
            total_pages: total_count.div_ceil(size),
            start_index: (page - 1) * size + 1,
            end_index: (page * size).min(total_count),
        }
    }
}

/// Everything the pagination footer needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub window: PageWindow,
    pub current_page: u32,
    pub page_size: PageSize,
    pub total_count: u64,
    pub can_go_next: bool,
    pub can_go_prev: bool,
}

impl PaginationView {
    /// Range label like `11 - 20 of 73`
    pub fn range_label(&self) -> String {
        format!(
            "{} - {} of {}",
            self.window.start_index, self.window.end_index, self.total_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_partial_page() {
        let window = PageWindow::derive(5, 10, 1);
        assert_eq!(
            window,
            PageWindow {
                total_pages: 1,
                start_index: 1,
                end_index: 5,
            }
        );
    }

    #[test]
    fn test_middle_and_last_page() {
        assert_eq!(
            PageWindow::derive(73, 20, 2),
            PageWindow {
                total_pages: 4,
                start_index: 21,
                end_index: 40,
            }
        );
        assert_eq!(
            PageWindow::derive(73, 20, 4),
            PageWindow {
                total_pages: 4,
                start_index: 61,
                end_index: 73,
            }
        );
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(PageWindow::derive(50, 10, 5).total_pages, 5);
        assert_eq!(PageWindow::derive(50, 10, 5).end_index, 50);
    }

    #[test]
    fn test_zero_results() {
        assert_eq!(PageWindow::derive(0, 10, 1), PageWindow::default());
        assert_eq!(PageWindow::derive(0, 50, 3), PageWindow::default());
    }

    #[test]
    fn test_range_label() {
        let view = PaginationView {
            window: PageWindow::derive(0, 10, 1),
            current_page: 1,
            page_size: PageSize::DEFAULT,
            total_count: 0,
            can_go_next: false,
            can_go_prev: false,
        };
        assert_eq!(view.range_label(), "0 - 0 of 0");
    }
}

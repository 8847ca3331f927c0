//! View model for the pagination bar below the table

use crate::state::AppState;
use ratatui::style::Style;

#[derive(Debug, Clone)]
pub struct PaginationBarViewModel {
    /// e.g. "11 - 20 of 73"
    pub range: String,
    /// e.g. "Page 2 of 8"
    pub page: String,
    /// e.g. "20 per page"
    pub page_size: String,
    pub prev_style: Style,
    pub next_style: Style,
    pub text_style: Style,
}

impl PaginationBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let view = state.search.pagination();

        let enabled = |on: bool| {
            if on {
                Style::default().fg(theme.accent_primary)
            } else {
                theme.muted()
            }
        };

        let page = if view.window.total_pages == 0 {
            "Page -".to_string()
        } else {
            format!(
                "Page {} of {}",
                view.current_page, view.window.total_pages
            )
        };

        Self {
            range: view.range_label(),
            page,
            page_size: format!("{} per page (+/-)", view.page_size),
            prev_style: enabled(view.can_go_prev),
            next_style: enabled(view.can_go_next),
            text_style: theme.text(),
        }
    }
}

use crate::state::AppState;
use crate::view_models::{
    DetailsViewModel, PaginationBarViewModel, ResultsViewModel, SearchBarViewModel,
    StatusBarViewModel,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub mod details_view;
pub mod pagination_bar;
pub mod results_table_view;
pub mod search_bar_view;
pub mod status_bar;

use pagination_bar::PaginationBarWidget;
use status_bar::StatusBarWidget;

/// Render the entire application UI
///
/// ```text
/// ┌ Search ──────────────────────────────────────────┐
/// └──────────────────────────────────────────────────┘
/// ┌ Results ──────────────────────┐┌ Details ────────┐
/// │                               ││                 │
/// └───────────────────────────────┘└─────────────────┘
///  pagination bar
///  status bar
/// ```
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(5),    // Results and details
            Constraint::Length(1), // Pagination bar
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    search_bar_view::render(&SearchBarViewModel::from_state(state), chunks[0], f);
    results_table_view::render(&ResultsViewModel::from_state(state), state, body[0], f);
    details_view::render(&DetailsViewModel::from_state(state), state, body[1], f);

    let pagination_vm = PaginationBarViewModel::from_state(state);
    f.render_widget(PaginationBarWidget(&pagination_vm), chunks[2]);

    let status_vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status_vm), chunks[3]);
}

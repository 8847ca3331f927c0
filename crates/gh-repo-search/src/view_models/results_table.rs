//! View model for the results table
//!
//! Pre-computes the table content for every display state of the session.

use super::format_count;
use crate::actions::Focus;
use crate::state::AppState;
use crate::theme::Theme;
use gh_search_session::{RepositoryItem, ResultsDisplay, SortColumn, SortDirection};
use ratatui::style::{Color, Style};

/// View model for the results pane
#[derive(Debug, Clone)]
pub struct ResultsViewModel {
    pub title: String,
    pub border_style: Style,
    pub content: ResultsContent,
}

/// What the results pane renders
#[derive(Debug, Clone)]
pub enum ResultsContent {
    /// Centered message instead of a table (welcome, loading, error, empty)
    Message { text: String, color: Color },
    Table {
        columns: Vec<ColumnHeader>,
        rows: Vec<ResultRowViewModel>,
        selected_index: Option<usize>,
    },
}

/// Column header, with sort indicator when it is the active sort column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: String,
    pub active: bool,
}

/// View model for a single result row
#[derive(Debug, Clone)]
pub struct ResultRowViewModel {
    pub name: String,
    pub language: String,
    pub stars: String,
    pub forks: String,
    pub updated: String,
    pub fg_color: Color,
    pub bg_color: Color,
}

impl ResultsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let session = &state.search;

        let title = match session.sort_column() {
            Some(column) if session.has_submitted() => format!(
                " Results for '{}' sorted by {} {} ",
                session.term(),
                column.label(),
                session.sort_direction().arrow()
            ),
            _ if session.has_submitted() => format!(" Results for '{}' ", session.term()),
            _ => " Results ".to_string(),
        };

        let content = match session.display() {
            ResultsDisplay::Welcome => ResultsContent::Message {
                text: "Type a search term and press Enter".to_string(),
                color: theme.text_muted,
            },
            ResultsDisplay::Loading => ResultsContent::Message {
                text: "Loading...".to_string(),
                color: theme.status_warning,
            },
            ResultsDisplay::Failed(message) => ResultsContent::Message {
                text: format!("Error: {} [r to retry]", message),
                color: theme.status_error,
            },
            ResultsDisplay::Empty => ResultsContent::Message {
                text: format!("No repositories match '{}'", session.term()),
                color: theme.text_muted,
            },
            ResultsDisplay::Results(items) => ResultsContent::Table {
                columns: Self::build_columns(session.sort_column(), session.sort_direction()),
                rows: items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        Self::build_row(item, index, session.selected_index(), theme)
                    })
                    .collect(),
                selected_index: session.selected_index(),
            },
        };

        Self {
            title,
            border_style: theme.border(state.focus == Focus::Results),
            content,
        }
    }

    fn build_columns(sort: Option<SortColumn>, direction: SortDirection) -> Vec<ColumnHeader> {
        let sortable = |column: SortColumn, key: char| {
            let active = sort == Some(column);
            let label = if active {
                format!("{} {}", column.label(), direction.arrow())
            } else {
                format!("{} ({})", column.label(), key)
            };
            ColumnHeader { label, active }
        };
        let plain = |label: &str| ColumnHeader {
            label: label.to_string(),
            active: false,
        };

        vec![
            plain("Name"),
            plain("Language"),
            sortable(SortColumn::Stars, 's'),
            sortable(SortColumn::Forks, 'f'),
            sortable(SortColumn::Updated, 'u'),
        ]
    }

    fn build_row(
        item: &RepositoryItem,
        index: usize,
        selected: Option<usize>,
        theme: &Theme,
    ) -> ResultRowViewModel {
        let (fg_color, bg_color) = if selected == Some(index) {
            (theme.active_fg, theme.selected_bg)
        } else if index % 2 == 0 {
            (theme.text_primary, Color::Reset)
        } else {
            (theme.text_primary, theme.alternate_row_bg)
        };

        ResultRowViewModel {
            name: item.name.clone(),
            language: item.primary_language.clone().unwrap_or_else(|| "-".into()),
            stars: format_count(item.star_count),
            forks: format_count(item.fork_count),
            updated: item.updated_at.format("%Y-%m-%d").to_string(),
            fg_color,
            bg_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gh_search_session::{FetchError, Page, RepositoryId, SessionEvent};

    fn item(id: &str, stars: u64) -> RepositoryItem {
        RepositoryItem {
            id: RepositoryId::new(id),
            name: format!("repo-{}", id),
            primary_language: (stars > 0).then(|| "Rust".to_string()),
            languages: vec![],
            fork_count: 3,
            star_count: stars,
            updated_at: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
            description: None,
            license: None,
        }
    }

    fn submitted(term: &str) -> AppState {
        let mut state = AppState::default();
        state
            .search
            .apply(SessionEvent::SubmitSearch(term.into()))
            .unwrap();
        state
    }

    fn complete(state: &mut AppState, items: Vec<RepositoryItem>) {
        let generation = state.search.in_flight().unwrap().generation;
        let total_count = items.len() as u64;
        state
            .search
            .apply(SessionEvent::FetchSucceeded {
                generation,
                page: Page {
                    items,
                    total_count,
                    end_cursor: None,
                    has_next_page: false,
                },
            })
            .unwrap();
    }

    fn message(vm: &ResultsViewModel) -> &str {
        match &vm.content {
            ResultsContent::Message { text, .. } => text,
            other => panic!("expected a message, got {:?}", other),
        }
    }

    #[test]
    fn test_welcome_before_any_search() {
        let vm = ResultsViewModel::from_state(&AppState::default());
        assert_eq!(message(&vm), "Type a search term and press Enter");
        assert_eq!(vm.title, " Results ");
    }

    #[test]
    fn test_loading_and_failed() {
        let mut state = submitted("tokio");
        assert_eq!(message(&ResultsViewModel::from_state(&state)), "Loading...");

        let generation = state.search.in_flight().unwrap().generation;
        state
            .search
            .apply(SessionEvent::FetchFailed {
                generation,
                error: FetchError::Unauthorized,
            })
            .unwrap();
        let vm = ResultsViewModel::from_state(&state);
        assert!(message(&vm).starts_with("Error: "));
        assert!(message(&vm).ends_with("[r to retry]"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut state = submitted("react");
        complete(&mut state, vec![]);
        assert_eq!(
            message(&ResultsViewModel::from_state(&state)),
            "No repositories match 'react'"
        );
    }

    #[test]
    fn test_rows_and_selection() {
        let mut state = submitted("tokio");
        complete(&mut state, vec![item("a", 1500), item("b", 0)]);
        state.search.select_item(&RepositoryId::new("b")).unwrap();

        let vm = ResultsViewModel::from_state(&state);
        let ResultsContent::Table {
            rows,
            selected_index,
            ..
        } = vm.content
        else {
            panic!("expected a table");
        };

        assert_eq!(selected_index, Some(1));
        assert_eq!(rows[0].name, "repo-a");
        assert_eq!(rows[0].stars, "1.5k");
        assert_eq!(rows[0].language, "Rust");
        assert_eq!(rows[0].updated, "2024-03-09");
        assert_eq!(rows[1].language, "-");
        assert_eq!(rows[1].bg_color, state.theme.selected_bg);
    }

    #[test]
    fn test_sort_indicator_in_header_and_title() {
        let mut state = submitted("tokio");
        state
            .search
            .apply(SessionEvent::ChangeSort(SortColumn::Stars))
            .unwrap();
        complete(&mut state, vec![item("a", 1)]);

        let vm = ResultsViewModel::from_state(&state);
        assert_eq!(vm.title, " Results for 'tokio' sorted by Stars ↓ ");

        let ResultsContent::Table { columns, .. } = vm.content else {
            panic!("expected a table");
        };
        let active: Vec<_> = columns.iter().filter(|c| c.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, "Stars ↓");
        assert_eq!(columns[3].label, "Forks (f)");
    }
}

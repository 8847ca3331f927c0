//! View model for the search input

use crate::actions::Focus;
use crate::state::AppState;
use gh_search_session::MIN_TERM_LENGTH;
use ratatui::style::Style;

#[derive(Debug, Clone)]
pub struct SearchBarViewModel {
    pub title: String,
    /// Typed text, or the placeholder when empty
    pub text: String,
    pub text_style: Style,
    pub border_style: Style,
    /// Show the terminal cursor after the text
    pub show_cursor: bool,
    /// Cursor column relative to the inner area
    pub cursor_offset: u16,
}

impl SearchBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let focused = state.focus == Focus::SearchInput;
        let input = &state.search_input.text;

        let (text, text_style) = if input.is_empty() && focused {
            (
                format!("Search repositories (min. {} characters)", MIN_TERM_LENGTH),
                theme.muted(),
            )
        } else {
            (input.clone(), theme.text())
        };

        let title = if focused {
            " Search [Enter to submit, Esc for results] ".to_string()
        } else {
            " Search [/ to edit] ".to_string()
        };

        Self {
            title,
            text,
            text_style,
            border_style: theme.border(focused),
            show_cursor: focused,
            cursor_offset: input.chars().count() as u16,
        }
    }
}

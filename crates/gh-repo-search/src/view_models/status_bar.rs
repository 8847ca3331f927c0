//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::actions::Focus;
use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    /// Emoji/icon for the status
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    /// Key hints for the focused pane, right aligned
    pub hints: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and hints
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        let hints = match state.focus {
            Focus::SearchInput => "Enter search · Esc results · Ctrl+C quit",
            Focus::Results => "/ search · j/k select · h/l page · s/f/u sort · r retry · q quit",
        }
        .to_string();

        if let Some(msg) = state.status_bar.current() {
            let fg_color = match msg.kind {
                StatusKind::Running => theme.status_warning,
                StatusKind::Success => theme.status_success,
                StatusKind::Warning => theme.status_warning,
                StatusKind::Error => theme.status_error,
            };

            Self {
                emoji: msg.kind.emoji(),
                message: msg.message.clone(),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                hints,
                message_style: Style::default().fg(fg_color).add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style: theme.muted(),
            }
        } else {
            // Welcome message when no status messages
            Self {
                emoji: "👋",
                message: "Welcome to GitHub repository search".to_string(),
                timestamp: String::new(),
                hints,
                message_style: theme.muted().add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: theme.muted(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::StatusBarAction;
    use crate::reducers::status_bar_reducer;
    use std::time::Duration;

    #[test]
    fn test_welcome_without_message() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert_eq!(vm.emoji, "👋");
        assert!(vm.timestamp.is_empty());
        assert!(vm.hints.starts_with("Enter search"));
    }

    #[test]
    fn test_current_message() {
        let mut state = AppState::default();
        state.focus = Focus::Results;
        state.status_bar = status_bar_reducer::reduce(
            state.status_bar,
            &StatusBarAction::error("Search failed", Duration::from_secs(5)),
        );

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.emoji, "🚨");
        assert_eq!(vm.message, "Search failed");
        assert_eq!(vm.timestamp.len(), 8);
        assert!(vm.hints.contains("r retry"));
    }

    #[test]
    fn test_success_message_uses_success_color() {
        let mut state = AppState::default();
        state.status_bar = status_bar_reducer::reduce(
            state.status_bar,
            &StatusBarAction::success("Found 3 repositories", Duration::from_secs(5)),
        );

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.emoji, "✅");
        assert_eq!(vm.message_style.fg, Some(state.theme.status_success));
    }
}

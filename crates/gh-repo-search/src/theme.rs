//! Color palette for the search screen

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg_primary: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent_primary: Color,
    /// Border of the focused pane
    pub border_focused: Color,
    pub border_unfocused: Color,
    pub active_fg: Color,
    pub selected_bg: Color,
    pub alternate_row_bg: Color,
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_primary: Color::Rgb(22, 22, 30),
            text_primary: Color::Rgb(205, 214, 244),
            text_muted: Color::Rgb(108, 112, 134),
            accent_primary: Color::Rgb(137, 180, 250),
            border_focused: Color::Rgb(137, 180, 250),
            border_unfocused: Color::Rgb(69, 71, 90),
            active_fg: Color::Rgb(17, 17, 27),
            selected_bg: Color::Rgb(137, 180, 250),
            alternate_row_bg: Color::Rgb(30, 30, 40),
            status_success: Color::Rgb(166, 227, 161),
            status_warning: Color::Rgb(249, 226, 175),
            status_error: Color::Rgb(243, 139, 168),
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border_unfocused)
        }
    }
}

//! Details panel for the selected repository

use crate::state::AppState;
use crate::view_models::{DetailsBody, DetailsViewModel};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

pub fn render(vm: &DetailsViewModel, state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.border(false))
        .title(Line::from(vm.title.as_str()).style(theme.title()));

    let lines = match &vm.body {
        DetailsBody::Placeholder(text) => vec![Line::from(text.as_str()).style(theme.muted())],
        DetailsBody::Repository {
            name,
            description,
            fields,
        } => {
            let mut lines = vec![
                Line::from(name.as_str()).style(
                    Style::default()
                        .fg(theme.accent_primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from(description.as_str()).style(theme.text()),
                Line::from(""),
            ];
            lines.extend(fields.iter().map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<10}", label), theme.muted()),
                    Span::styled(value.as_str(), theme.text()),
                ])
            }));
            lines
        }
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(paragraph, area);
}

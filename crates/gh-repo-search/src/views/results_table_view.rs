//! Results table

use crate::state::AppState;
use crate::view_models::{ResultsContent, ResultsViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub fn render(vm: &ResultsViewModel, state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(vm.border_style)
        .title(Line::from(vm.title.as_str()).style(theme.title()));

    match &vm.content {
        ResultsContent::Message { text, color } => {
            // Vertically center the message
            let inner_height = area.height.saturating_sub(2);
            let padding = inner_height.saturating_sub(1) / 2;
            let mut lines = vec![Line::from(""); padding as usize];
            lines.push(Line::from(text.as_str()).style(Style::default().fg(*color)));

            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, area);
        }
        ResultsContent::Table {
            columns,
            rows,
            selected_index,
        } => {
            let header = Row::new(columns.iter().map(|column| {
                let style = if column.active {
                    Style::default()
                        .fg(theme.accent_primary)
                        .add_modifier(Modifier::BOLD)
                } else {
                    theme.muted().add_modifier(Modifier::BOLD)
                };
                Cell::from(column.label.as_str()).style(style)
            }))
            .height(1);

            let rows = rows.iter().map(|row| {
                Row::new(vec![
                    Cell::from(row.name.as_str()),
                    Cell::from(row.language.as_str()),
                    Cell::from(row.stars.as_str()),
                    Cell::from(row.forks.as_str()),
                    Cell::from(row.updated.as_str()),
                ])
                .style(Style::default().fg(row.fg_color).bg(row.bg_color))
            });

            let widths = [
                Constraint::Min(20),
                Constraint::Length(12),
                Constraint::Length(11),
                Constraint::Length(11),
                Constraint::Length(13),
            ];

            let table = Table::new(rows, widths)
                .header(header)
                .block(block)
                .column_spacing(1);

            // Keeps the selected row scrolled into view
            let mut table_state = TableState::default().with_selected(*selected_index);
            f.render_stateful_widget(table, area, &mut table_state);
        }
    }
}

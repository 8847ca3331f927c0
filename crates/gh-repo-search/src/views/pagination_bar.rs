//! Pagination Bar Widget
//!
//! Format: ` ◀ h  11 - 20 of 73 · Page 2 of 8 · 10 per page (+/-)  l ▶`

use crate::view_models::PaginationBarViewModel;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct PaginationBarWidget<'a>(pub &'a PaginationBarViewModel);

impl Widget for PaginationBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        let line = Line::from(vec![
            Span::styled("◀ h  ", vm.prev_style),
            Span::styled(vm.range.as_str(), vm.text_style),
            Span::styled(" · ", vm.text_style),
            Span::styled(vm.page.as_str(), vm.text_style),
            Span::styled(" · ", vm.text_style),
            Span::styled(vm.page_size.as_str(), vm.text_style),
            Span::styled("  l ▶", vm.next_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

//! Search input box

use crate::view_models::SearchBarViewModel;
use ratatui::{
    layout::{Position, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(vm: &SearchBarViewModel, area: Rect, f: &mut Frame) {
    let block = Block::bordered()
        .title(vm.title.as_str())
        .border_style(vm.border_style);
    let inner = block.inner(area);

    let paragraph = Paragraph::new(vm.text.as_str())
        .style(vm.text_style)
        .block(block);
    f.render_widget(paragraph, area);

    if vm.show_cursor && inner.width > 0 {
        let x = inner.x + vm.cursor_offset.min(inner.width.saturating_sub(1));
        f.set_cursor_position(Position::new(x, inner.y));
    }
}

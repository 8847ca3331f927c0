//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] emoji message                     hints`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        // Fill entire row with background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1; // 1 char padding

        if !vm.timestamp.is_empty() {
            let ts_str = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts_str, vm.metadata_style);
            x += ts_str.chars().count() as u16;
        }

        buf.set_string(x, area.y, format!("{} ", vm.emoji), vm.message_style);
        x += 3; // emoji typically renders as 2 cells

        // Hints on the right side, dropped when there is no room
        let hints_width = vm.hints.chars().count() as u16;
        let message_width = vm.message.chars().count() as u16;
        let hints_x = right.saturating_sub(hints_width + 1);
        let show_hints = hints_x > x + message_width + 2;

        let available = if show_hints {
            hints_x.saturating_sub(x + 1)
        } else {
            right.saturating_sub(x + 1)
        } as usize;

        if vm.message.chars().count() > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if show_hints {
            buf.set_string(hints_x, area.y, &vm.hints, vm.metadata_style);
        }
    }
}

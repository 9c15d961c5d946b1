//! Page size field
//!
//! Shown in the controls row; the edit cursor appears while the page size
//! mode is active.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct PageSizeField<'a> {
    buffer: &'a str,
    editing: bool,
}

impl<'a> PageSizeField<'a> {
    pub fn new(buffer: &'a str) -> Self {
        Self {
            buffer,
            editing: false,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for PageSizeField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.editing { " Size [Enter] " } else { " Size [s] " };
        let block = styles::panel(self.editing)
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let field_bg = if self.editing {
            palette::INPUT_ACTIVE_BG
        } else {
            palette::INPUT_INACTIVE_BG
        };
        let mut spans = vec![Span::styled(
            format!(" {}", self.buffer),
            styles::body().bg(field_bg),
        )];
        if self.editing {
            spans.push(Span::styled("▌", styles::fg(palette::ACCENT).bg(field_bg)));
        }

        // Fill the rest of the field
        buf.set_style(inner, Style::default().bg(field_bg));
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);
    }
}

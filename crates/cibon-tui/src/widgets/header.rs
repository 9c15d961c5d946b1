//! Header bar widget
//!
//! Shows the app title, the collection being browsed and the keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

/// Keybinding hints in display order
const SHORTCUTS: [(&str, &str); 6] = [
    ("c", "New"),
    ("e", "Edit"),
    ("d", "Delete"),
    ("s", "Size"),
    ("r", "Reload"),
    ("q", "Quit"),
];

/// Main header showing app title, collection and keybindings
pub struct MainHeader<'a> {
    collection_rel: &'a str,
    api_root: &'a str,
    busy: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(collection_rel: &'a str, api_root: &'a str) -> Self {
        Self {
            collection_rel,
            api_root,
            busy: false,
        }
    }

    /// Mark a request as in flight (status dot turns yellow)
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let dot_style = if self.busy {
            styles::fg(palette::STATUS_YELLOW)
        } else {
            styles::fg(palette::STATUS_GREEN)
        };

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("●", dot_style),
            Span::raw(" "),
            Span::styled("Cibon", styles::emphasis()),
            Span::raw(" "),
            Span::styled("/", styles::dim()),
            Span::raw(" "),
            Span::styled(self.collection_rel, styles::label()),
        ]);
        let left_width = left_line.width() as u16;

        let mut shortcut_spans = Vec::with_capacity(SHORTCUTS.len() * 3);
        for (key, label) in SHORTCUTS {
            shortcut_spans.push(Span::styled("[", styles::dim()));
            shortcut_spans.push(Span::styled(key, styles::key()));
            shortcut_spans.push(Span::styled(format!("] {} ", label), styles::dim()));
        }
        let shortcuts_line = Line::from(shortcut_spans);
        let shortcuts_width = shortcuts_line.width() as u16;

        let root_line = Line::from(Span::styled(
            format!("{} ", self.api_root),
            styles::dim(),
        ));
        let root_width = root_line.width() as u16;

        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let shortcuts_x = inner.x + left_width + 2;
        if left_width + shortcuts_width + 2 <= inner.width {
            buf.set_line(shortcuts_x, inner.y, &shortcuts_line, shortcuts_width);
        }

        // API root only when everything else still fits
        if left_width + shortcuts_width + root_width + 4 <= inner.width {
            let root_x = inner.x + inner.width - root_width;
            buf.set_line(root_x, inner.y, &root_line, root_width);
        }
    }
}

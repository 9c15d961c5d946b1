//! Pagination controls
//!
//! A button is drawn for each navigation relation the current page
//! advertises, and only for those.

use cibon_core::{NavRel, PageMetadata};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Key that triggers each control
fn key_hint(rel: NavRel) -> &'static str {
    match rel {
        NavRel::First => "Home",
        NavRel::Prev => "←",
        NavRel::Next => "→",
        NavRel::Last => "End",
    }
}

pub struct Pagination<'a> {
    rels: &'a [NavRel],
    metadata: Option<PageMetadata>,
}

impl<'a> Pagination<'a> {
    pub fn new(rels: &'a [NavRel]) -> Self {
        Self {
            rels,
            metadata: None,
        }
    }

    pub fn metadata(mut self, metadata: Option<PageMetadata>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Button line: `[<<] Home  [<] ←` for each present relation
    fn buttons(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for rel in NavRel::ALL.iter().filter(|rel| self.rels.contains(*rel)) {
            spans.push(Span::styled(format!("[{}]", rel.label()), styles::emphasis()));
            spans.push(Span::styled(format!(" {}  ", key_hint(*rel)), styles::dim()));
        }
        Line::from(spans)
    }
}

impl Widget for Pagination<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(false)
            .title(" Pages ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let buttons = self.buttons();
        let buttons_width = buttons.width() as u16;
        buf.set_line(inner.x + 1, inner.y, &buttons, inner.width.saturating_sub(1));

        if let Some(meta) = self.metadata.filter(|m| m.total_pages > 0) {
            let position = Line::from(Span::styled(
                format!("Page {} of {} ", meta.number + 1, meta.total_pages),
                styles::label(),
            ));
            let position_width = position.width() as u16;
            if buttons_width + position_width + 2 <= inner.width {
                let x = inner.x + inner.width - position_width;
                buf.set_line(x, inner.y, &position, position_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(rels: &[NavRel]) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 3);
        term.render_widget(Pagination::new(rels), term.area());
        term
    }

    #[test]
    fn test_all_controls_when_all_links_present() {
        let term = render(&NavRel::ALL);
        for label in ["[<<]", "[<]", "[>]", "[>>]"] {
            assert!(term.buffer_contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_only_present_links_are_rendered() {
        let term = render(&[NavRel::First, NavRel::Next, NavRel::Last]);

        assert!(term.buffer_contains("[<<]"));
        assert!(term.buffer_contains("[>]"));
        assert!(term.buffer_contains("[>>]"));
        assert!(!term.buffer_contains("[<]"));
    }

    #[test]
    fn test_no_links_no_controls() {
        let term = render(&[]);
        assert!(!term.buffer_contains("[<"));
        assert!(!term.buffer_contains("[>"));
    }

    #[test]
    fn test_controls_keep_display_order() {
        let term = render(&[NavRel::Last, NavRel::Prev]);
        let line = term.line(1);
        assert!(line.find("[<]").unwrap() < line.find("[>>]").unwrap());
    }

    #[test]
    fn test_page_position_from_metadata() {
        let mut term = TestTerminal::with_size(60, 3);
        let meta = PageMetadata {
            size: 2,
            total_elements: 3,
            total_pages: 2,
            number: 1,
        };
        term.render_widget(
            Pagination::new(&[NavRel::First, NavRel::Prev]).metadata(Some(meta)),
            term.area(),
        );

        assert!(term.buffer_contains("Page 2 of 2"));
    }
}

//! Modal notice for update conflicts and failed requests

use cibon_app::notice::{Notice, NoticeKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay;
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 9;

pub struct NoticeDialog<'a> {
    notice: &'a Notice,
}

impl<'a> NoticeDialog<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }
}

impl Widget for NoticeDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::open_modal(buf, area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let title = format!(" {} ", self.notice.title());
        let edge = match self.notice.kind {
            NoticeKind::Conflict => palette::STATUS_YELLOW,
            NoticeKind::Error => palette::STATUS_RED,
        };
        let block = styles::dialog(&title, edge);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(self.notice.message.as_str(), styles::body())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", styles::key()),
                Span::styled(" Dismiss", styles::dim()),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_conflict_notice() {
        let notice = Notice::conflict("http://h/api/farmers/1");
        let mut term = TestTerminal::new();

        term.render_widget(NoticeDialog::new(&notice), term.area());

        assert!(term.buffer_contains("Conflict"));
        assert!(term.buffer_contains("DENIED: Unable to update"));
        assert!(term.buffer_contains("[Enter] Dismiss"));
    }

    #[test]
    fn test_error_notice_border_is_red() {
        let notice = Notice::error("Delete", "HTTP 500");
        let mut term = TestTerminal::new();

        term.render_widget(NoticeDialog::new(&notice), term.area());

        assert!(term.buffer_contains("Delete failed: HTTP 500"));
        let modal = modal_overlay::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, term.area());
        assert_eq!(
            term.buffer()[(modal.x, modal.y)].fg,
            palette::STATUS_RED
        );
    }
}

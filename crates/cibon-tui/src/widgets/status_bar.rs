//! Status bar
//!
//! Request activity on the left, page summary and the last load time on the
//! right. The most recent error replaces the summary until the next success.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct StatusBar<'a> {
    pub loading: bool,
    pub saving: bool,
    pub spinner_frame: usize,
    pub record_count: usize,
    pub page_size: u32,
    pub total_elements: Option<u64>,
    pub last_loaded: Option<DateTime<Local>>,
    pub show_timestamps: bool,
    pub last_error: Option<&'a str>,
}

impl StatusBar<'_> {
    fn activity(&self) -> Span<'static> {
        let spinner = SPINNER[self.spinner_frame % SPINNER.len()];
        if self.saving {
            Span::styled(format!(" {} Saving", spinner), styles::fg(palette::STATUS_YELLOW))
        } else if self.loading {
            Span::styled(format!(" {} Loading", spinner), styles::fg(palette::STATUS_YELLOW))
        } else {
            Span::styled(" ● Ready", styles::fg(palette::STATUS_GREEN))
        }
    }

    fn summary(&self) -> Span<'static> {
        if let Some(error) = self.last_error {
            return Span::styled(format!("{} ", error), styles::fg(palette::STATUS_RED));
        }

        let mut text = match self.total_elements {
            Some(total) => format!("{} of {} records", self.record_count, total),
            None => format!("{} records", self.record_count),
        };
        text.push_str(&format!(" · size {}", self.page_size));
        if self.show_timestamps {
            if let Some(loaded) = self.last_loaded {
                text.push_str(&format!(" · loaded {}", loaded.format("%H:%M:%S")));
            }
        }
        text.push(' ');
        Span::styled(text, styles::label())
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(palette::DEEPEST_BG));

        let activity = Line::from(self.activity());
        let activity_width = activity.width() as u16;
        buf.set_line(area.x, area.y, &activity, area.width);

        let summary = Line::from(self.summary());
        let summary_width = summary.width() as u16;
        let available = area.width.saturating_sub(activity_width + 1);
        let shown = summary_width.min(available);
        buf.set_line(area.x + area.width - shown, area.y, &summary, shown);
    }
}

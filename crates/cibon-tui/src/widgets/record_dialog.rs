//! Create and update dialogs
//!
//! Both dialogs render one labelled input per schema attribute. The focused
//! input carries the cursor.

use cibon_app::form::RecordForm;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use super::modal_overlay;
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 60;
const LABEL_WIDTH: usize = 14;

/// Modal record form drawn over the whole screen
pub struct RecordDialog<'a> {
    title: &'a str,
    submit_label: &'a str,
    form: &'a RecordForm,
}

impl<'a> RecordDialog<'a> {
    /// Dialog for a new record
    pub fn create(form: &'a RecordForm) -> Self {
        Self {
            title: " Create new farmer ",
            submit_label: "Create",
            form,
        }
    }

    /// Dialog for changing the form's target record
    pub fn update(form: &'a RecordForm) -> Self {
        Self {
            title: " Update farmer ",
            submit_label: "Update",
            form,
        }
    }

    fn height(&self) -> u16 {
        // borders + blank + fields + blank + footer
        (self.form.fields.len() as u16).saturating_add(5)
    }

    fn field_line(&self, index: usize, width: u16) -> Line<'a> {
        let field = &self.form.fields[index];
        let focused = index == self.form.focus;
        let label_style = if focused {
            styles::emphasis()
        } else {
            styles::label()
        };
        let input_bg = if focused {
            palette::INPUT_ACTIVE_BG
        } else {
            palette::INPUT_INACTIVE_BG
        };

        let label = format!(" {:<width$}", field.label, width = LABEL_WIDTH);
        let input_width = (width as usize).saturating_sub(label.chars().count() + 2);
        let mut value: String = field.value.clone();
        if focused {
            value.push('▌');
        }
        let padded = format!(" {:<width$}", value, width = input_width.saturating_sub(1));

        Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(padded, styles::body().bg(input_bg)),
        ])
    }

    fn footer(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(" [Tab]", styles::key()),
            Span::styled(" Next  ", styles::dim()),
            Span::styled("[Enter]", styles::key()),
            Span::styled(format!(" {}  ", self.submit_label), styles::dim()),
            Span::styled("[Esc]", styles::key()),
            Span::styled(" Cancel", styles::dim()),
        ])
    }
}

impl Widget for RecordDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = modal_overlay::open_modal(buf, area, DIALOG_WIDTH, self.height());
        let block = styles::dialog(self.title, palette::BORDER_ACTIVE);
        let inner = block.inner(modal);
        block.render(modal, buf);

        for index in 0..self.form.fields.len() {
            let y = inner.y + 1 + index as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let line = self.field_line(index, inner.width);
            buf.set_line(inner.x, y, &line, inner.width);
        }

        if inner.height > 0 {
            let footer_y = inner.y + inner.height - 1;
            buf.set_style(
                Rect::new(inner.x, footer_y, inner.width, 1),
                Style::default().bg(palette::POPUP_BG),
            );
            buf.set_line(inner.x, footer_y, &self.footer(), inner.width);
        }
    }
}

//! Record table widget
//!
//! One column per schema attribute in schema order, followed by the row
//! actions. The selected row is highlighted and is the target of `e`/`d`;
//! the table scrolls to keep it in view.

use cibon_core::Record;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{
        Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState, Widget,
    },
};

use crate::theme::{palette, styles};

/// Width of the trailing actions column
const ACTIONS_WIDTH: u16 = 22;

pub struct FarmerTable<'a> {
    records: &'a [Record],
    attributes: &'a [String],
    selected: usize,
    focused: bool,
    title: &'a str,
}

impl<'a> FarmerTable<'a> {
    pub fn new(records: &'a [Record], attributes: &'a [String], title: &'a str) -> Self {
        Self {
            records,
            attributes,
            selected: 0,
            focused: true,
            title,
        }
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    /// Unfocused while a dialog is open
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn header(&self) -> Row<'a> {
        let header_style = styles::fg(palette::ACCENT).add_modifier(Modifier::BOLD);
        let mut cells: Vec<Cell> = self
            .attributes
            .iter()
            .map(|name| Cell::from(name.as_str()))
            .collect();
        cells.push(Cell::from(""));
        Row::new(cells).style(header_style).bottom_margin(1)
    }

    fn row(&self, index: usize, record: &Record) -> Row<'a> {
        let is_selected = index == self.selected;
        let mut cells: Vec<Cell> = self
            .attributes
            .iter()
            .map(|name| Cell::from(record.display_value(name)))
            .collect();

        let actions_style = if is_selected {
            Style::default()
        } else {
            styles::dim()
        };
        cells.push(Cell::from(Line::styled("[e] Update [d] Delete", actions_style)));

        let row = Row::new(cells);
        if is_selected && self.focused {
            row.style(styles::selected_row())
        } else if is_selected {
            row.style(Style::default().bg(palette::INPUT_INACTIVE_BG))
        } else {
            row.style(styles::body())
        }
    }
}

impl Widget for FarmerTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel(self.focused)
            .title(format!(" {} ", self.title));

        if self.records.is_empty() {
            let message = if self.attributes.is_empty() {
                "Loading..."
            } else {
                "No records on this page"
            };
            Paragraph::new(Line::styled(message, styles::dim()))
                .block(block)
                .render(area, buf);
            return;
        }

        let mut widths: Vec<Constraint> = self
            .attributes
            .iter()
            .map(|_| Constraint::Fill(1))
            .collect();
        widths.push(Constraint::Length(ACTIONS_WIDTH));

        let rows: Vec<Row> = self
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| self.row(index, record))
            .collect();

        let table = Table::new(rows, widths)
            .header(self.header())
            .column_spacing(1)
            .highlight_spacing(HighlightSpacing::Never)
            .block(block);

        // Selection drives the scroll offset
        let mut table_state = TableState::default().with_selected(Some(self.selected));
        StatefulWidget::render(table, area, buf, &mut table_state);
    }
}

//! Screen layout definitions for the TUI
//!
//! The main screen is a header, the record table, a controls row holding the
//! pagination buttons and the page size field, and a one-line status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the page size field in the controls row
const PAGE_SIZE_WIDTH: u16 = 20;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, collection and keybindings
    pub header: Rect,

    /// Record table (glass container)
    pub table: Rect,

    /// Pagination buttons (left part of the controls row)
    pub pagination: Rect,

    /// Page size field (right part of the controls row)
    pub page_size: Rect,

    /// Status bar (single row)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Table
        Constraint::Length(3), // Controls row
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let controls = Layout::horizontal([Constraint::Min(10), Constraint::Length(PAGE_SIZE_WIDTH)])
        .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        table: rows[1],
        pagination: controls[0],
        page_size: controls[1],
        status: rows[3],
    }
}

//! Test utilities for TUI rendering verification
//!
//! Widgets and full screens are rendered into ratatui's `TestBackend` and
//! asserted on as plain text.

use cibon_app::AppState;
use cibon_core::{Attribute, Links, PageMetadata, Record, Schema};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use serde_json::json;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.line(line).contains(text)
    }

    /// Content of a single row
    pub fn line(&self, line: u16) -> String {
        let buffer = self.buffer();
        if line >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|x| buffer[(x, line)].symbol())
            .collect()
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.line(y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Farmer schema with the three standard attributes
pub fn farmer_schema() -> Schema {
    Schema::new(vec![
        Attribute::new("firstName"),
        Attribute::new("lastName"),
        Attribute::new("description"),
    ])
}

/// Farmer record at `http://localhost:8080/api/farmers/{id}`
pub fn test_record(id: u32, first: &str, last: &str, description: &str) -> Record {
    let href = format!("http://localhost:8080/api/farmers/{}", id);
    Record::from_entity(
        &href,
        &json!({
            "firstName": first,
            "lastName": last,
            "description": description,
            "_links": { "self": { "href": href } }
        }),
        Some("\"0\"".to_string()),
    )
    .expect("valid farmer entity")
}

/// State with the first page of a three-farmer collection loaded
pub fn loaded_state() -> AppState {
    let mut state = AppState::new();
    state.schema = farmer_schema();
    state.records = vec![
        test_record(1, "Anna", "Bauer", "wheat"),
        test_record(2, "Ben", "Koch", "dairy"),
    ];
    state.links = Links::new()
        .with("first", "http://localhost:8080/api/farmers?page=0&size=2")
        .with("next", "http://localhost:8080/api/farmers?page=1&size=2")
        .with("last", "http://localhost:8080/api/farmers?page=1&size=2");
    state.page_metadata = Some(PageMetadata {
        size: 2,
        total_elements: 3,
        total_pages: 2,
        number: 0,
    });
    state
}

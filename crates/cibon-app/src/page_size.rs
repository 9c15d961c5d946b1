//! Page-size input state
//!
//! The buffer accepts one or more ASCII digits that fit in a `u32`. Any other
//! edit has its last character dropped, once, without complaint.

/// Outcome of a single edit of the page-size buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSizeEdit {
    /// Buffer holds a valid page size
    Accepted(u32),
    /// Buffer was invalid and its last character was removed
    Reverted,
    /// Buffer is empty; nothing to apply
    Empty,
}

/// Text buffer behind the page-size control
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSizeInput {
    buffer: String,
}

impl PageSizeInput {
    pub fn new(page_size: u32) -> Self {
        Self {
            buffer: page_size.to_string(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Reset the buffer to show `page_size`
    pub fn reset(&mut self, page_size: u32) {
        self.buffer = page_size.to_string();
    }

    /// Replace the buffer with `text` and validate it
    pub fn edit(&mut self, text: &str) -> PageSizeEdit {
        self.buffer = text.to_string();

        if self.buffer.is_empty() {
            return PageSizeEdit::Empty;
        }

        match parse_page_size(&self.buffer) {
            Some(size) => PageSizeEdit::Accepted(size),
            None => {
                self.buffer.pop();
                PageSizeEdit::Reverted
            }
        }
    }
}

/// Parse a buffer made only of ASCII digits
pub fn parse_page_size(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

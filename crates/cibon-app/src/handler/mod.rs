//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use cibon_core::{FieldValues, Record};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Follow the collection relation at `page_size`, fetch schema and records
    Load { generation: u64, page_size: u32 },

    /// Fetch the page behind a navigation href and its records
    Navigate { generation: u64, href: String },

    /// POST a new record, then re-fetch the collection at `page_size`
    Create {
        fields: FieldValues,
        page_size: u32,
    },

    /// Conditional PUT of new values for `record`
    Update {
        record: Box<Record>,
        fields: FieldValues,
    },

    /// DELETE a record by its self href
    Delete { href: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<crate::message::Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: crate::message::Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

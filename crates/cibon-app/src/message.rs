//! Message types for the application (TEA pattern)

use cibon_client::LoadedCollection;
use cibon_core::{FieldValues, Links, NavRel, Page, Record};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────
    /// Full reload at the current page size
    Reload,
    /// Move to the page behind a navigation relation
    Navigate(NavRel),
    /// A full load finished
    LoadCompleted {
        generation: u64,
        collection: Box<LoadedCollection>,
    },
    /// A navigation finished
    PageLoaded { generation: u64, page: Box<Page> },
    /// A load or navigation failed
    LoadFailed { generation: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,

    // ─────────────────────────────────────────────────────────
    // Page Size
    // ─────────────────────────────────────────────────────────
    OpenPageSizeInput,
    /// New content of the page-size buffer
    PageSizeInput { text: String },
    ClosePageSizeInput,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    OpenCreateDialog,
    /// Open the update dialog for the selected row
    OpenUpdateDialog,
    /// New content of the focused form input
    FormInput { text: String },
    FormNextField,
    FormPrevField,
    SubmitForm,
    CancelForm,

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────
    CreateRecord { fields: FieldValues },
    /// Server accepted a new record; carries the links of the re-fetched
    /// collection so the view can move to its last page
    RecordCreated { links: Links },
    UpdateRecord {
        record: Box<Record>,
        fields: FieldValues,
    },
    RecordUpdated,
    /// Server refused an update with 412
    UpdateConflict { href: String },
    DeleteRecord { href: String },
    RecordDeleted,
    /// A create, update or delete failed for a reason other than a conflict
    MutationFailed {
        operation: &'static str,
        error: String,
    },

    // ─────────────────────────────────────────────────────────
    // Notices
    // ─────────────────────────────────────────────────────────
    DismissNotice,
}

//! Widget components for the TUI

mod farmer_table;
mod header;
pub mod modal_overlay;
mod notice_dialog;
mod page_size_input;
mod pagination;
mod record_dialog;
mod status_bar;

pub use farmer_table::FarmerTable;
pub use header::MainHeader;
pub use notice_dialog::NoticeDialog;
pub use page_size_input::PageSizeField;
pub use pagination::Pagination;
pub use record_dialog::RecordDialog;
pub use status_bar::StatusBar;

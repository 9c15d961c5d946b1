//! cibon-tui - Terminal UI for the Cibon farmer desk
//!
//! ratatui front end over `cibon-app`: maps crossterm key events to
//! [`cibon_app::InputKey`], renders [`cibon_app::AppState`] and drives the
//! event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;

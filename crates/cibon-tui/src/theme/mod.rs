//! Colours and styles for the terminal UI. Widgets take colours from
//! `palette` and reach for `styles` for anything composed.

pub mod palette;
pub mod styles;

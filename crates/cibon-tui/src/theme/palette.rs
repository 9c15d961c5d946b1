//! Colour constants

use ratatui::style::Color;

pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::DarkGray;

pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;
pub const ACCENT: Color = Color::Cyan;

pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
/// Text drawn over `ACCENT`
pub const CONTRAST_FG: Color = Color::Black;

pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

/// Drop shadow under dialogs
pub const SHADOW: Color = Color::Black;

/// Text input backgrounds; the focused input is lighter
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);
pub const INPUT_INACTIVE_BG: Color = Color::Rgb(40, 40, 50);

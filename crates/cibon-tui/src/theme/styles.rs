//! Style helpers shared by the widgets

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

pub fn fg(color: Color) -> Style {
    Style::new().fg(color)
}

/// Record values and message text
pub fn body() -> Style {
    fg(palette::TEXT_PRIMARY)
}

/// Field labels and summaries
pub fn label() -> Style {
    fg(palette::TEXT_SECONDARY)
}

pub fn dim() -> Style {
    fg(palette::TEXT_MUTED)
}

pub fn emphasis() -> Style {
    fg(palette::ACCENT).add_modifier(Modifier::BOLD)
}

/// Key names inside hints like `[Enter] Save`
pub fn key() -> Style {
    fg(palette::STATUS_YELLOW)
}

pub fn selected_row() -> Style {
    Style::new()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Rounded card for the main screen; the border lights up while focused
pub fn panel(focused: bool) -> Block<'static> {
    let edge = if focused {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(fg(edge))
        .style(Style::new().bg(palette::CARD_BG))
}

/// Titled popup with a coloured edge
pub fn dialog(title: &str, edge: Color) -> Block<'_> {
    Block::new()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(fg(edge))
        .style(Style::new().bg(palette::POPUP_BG))
}

//! Semantic style builders over the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_primary)
}

pub fn text_secondary(palette: &Palette) -> Style {
    Style::default().fg(palette.text_secondary)
}

pub fn text_muted(palette: &Palette) -> Style {
    Style::default().fg(palette.text_muted)
}

// --- Accent styles ---
pub fn accent(palette: &Palette) -> Style {
    Style::default().fg(palette.accent)
}

pub fn accent_bold(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn error(palette: &Palette) -> Style {
    Style::default().fg(palette.error)
}

pub fn error_bold(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.error)
        .add_modifier(Modifier::BOLD)
}

// --- Selection highlight ---
pub fn selection(palette: &Palette) -> Style {
    Style::default()
        .fg(palette.selection_fg)
        .bg(palette.selection_bg)
}

// --- Containers ---
/// Rounded bordered container used by the search bar and the list
pub fn panel_block(palette: &Palette, active: bool) -> Block<'static> {
    let border_color = if active {
        palette.border_active
    } else {
        palette.border
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}

// --- Keybinding hint style ---
pub fn keybinding(palette: &Palette) -> Style {
    Style::default().fg(palette.warning)
}

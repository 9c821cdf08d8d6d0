//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Search input (bordered, always visible)
    pub search: Rect,

    /// Error banner row; zero-height unless the last fetch failed
    pub banner: Rect,

    /// Main content: product list or loading indicator
    pub body: Rect,

    /// Bottom status bar with key hints
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_banner` - Whether to reserve a row for the error banner
pub fn create(area: Rect, show_banner: bool) -> ScreenAreas {
    let banner_height = if show_banner { 1 } else { 0 };

    let constraints = vec![
        Constraint::Length(3),             // Search bar (borders + one input row)
        Constraint::Length(banner_height), // Error banner
        Constraint::Min(3),                // Product list / loading indicator
        Constraint::Length(1),             // Status bar
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        search: chunks[0],
        banner: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

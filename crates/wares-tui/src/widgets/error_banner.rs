//! Error banner widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// One-line banner shown under the search bar after a failed fetch.
/// Whatever stale list state exists stays visible below it.
pub struct ErrorBanner<'a> {
    message: &'a str,
    palette: &'a Palette,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str, palette: &'a Palette) -> Self {
        Self { message, palette }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = Line::from(Span::styled(
            self.message,
            styles::error_bold(self.palette),
        ));
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

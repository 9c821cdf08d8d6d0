//! Loading indicator widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Centered spinner shown while a fetch is in flight; the list is
/// suppressed until the fetch resolves.
pub struct LoadingIndicator<'a> {
    frame: usize,
    palette: &'a Palette,
}

impl<'a> LoadingIndicator<'a> {
    pub fn new(frame: usize, palette: &'a Palette) -> Self {
        Self { frame, palette }
    }
}

impl Widget for LoadingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, false).title(" Products ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let spinner = spinner_frame(self.frame);
        let lines = vec![
            Line::from(Span::styled(spinner, styles::accent_bold(self.palette))),
            Line::from(Span::styled(
                "Please Wait...",
                styles::text_secondary(self.palette),
            )),
        ];

        // Vertically center the two lines inside the panel
        let top_padding = inner.height.saturating_sub(lines.len() as u16) / 2;
        let centered = Rect::new(
            inner.x,
            inner.y + top_padding,
            inner.width,
            (lines.len() as u16).min(inner.height),
        );

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}

/// Pick the spinner glyph for an animation frame
fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles_through_frames() {
        assert_eq!(spinner_frame(0), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(9), SPINNER_FRAMES[9]);
        assert_eq!(spinner_frame(10), SPINNER_FRAMES[0]);
        assert_eq!(spinner_frame(23), SPINNER_FRAMES[3]);
    }
}

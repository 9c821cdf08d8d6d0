//! Search input widget
//!
//! The single text input on the screen; always focused.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use wares_app::state::SearchState;

use crate::theme::{styles, Palette};

const PLACEHOLDER: &str = "Search products...";

/// Bordered search bar showing the live query and a match count
pub struct SearchBar<'a> {
    search: &'a SearchState,
    palette: &'a Palette,
    /// (shown, total) row counts for the match indicator
    counts: Option<(usize, usize)>,
}

impl<'a> SearchBar<'a> {
    pub fn new(search: &'a SearchState, palette: &'a Palette) -> Self {
        Self {
            search,
            palette,
            counts: None,
        }
    }

    /// Show "shown/total" on the right edge of the bar
    pub fn with_counts(mut self, shown: usize, total: usize) -> Self {
        self.counts = Some((shown, total));
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, true).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = if self.search.is_empty() {
            Line::from(vec![
                Span::styled("/ ", styles::text_muted(self.palette)),
                Span::styled(PLACEHOLDER, styles::text_muted(self.palette)),
            ])
        } else {
            Line::from(vec![
                Span::styled("/ ", styles::accent(self.palette)),
                Span::styled(&self.search.query, styles::text_primary(self.palette)),
                Span::styled("_", styles::accent(self.palette)),
            ])
        };
        Paragraph::new(line).render(inner, buf);

        // Match count only while a query is narrowing the list
        if !self.search.is_empty() {
            if let Some((shown, total)) = self.counts {
                let count = Line::from(Span::styled(
                    format!("{shown}/{total} "),
                    styles::text_secondary(self.palette),
                ));
                Paragraph::new(count)
                    .alignment(Alignment::Right)
                    .render(inner, buf);
            }
        }
    }
}

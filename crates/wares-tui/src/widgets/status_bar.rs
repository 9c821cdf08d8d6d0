//! Bottom status bar with state summary and key hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use wares_core::LoadState;

use crate::theme::{styles, Palette};

/// One-row bar: load state and row counts on the left, key hints on the
/// right (the reload hint is the screen's "Reload Data" affordance).
pub struct StatusBar<'a> {
    load_state: &'a LoadState,
    shown: usize,
    total: usize,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(load_state: &'a LoadState, palette: &'a Palette) -> Self {
        Self {
            load_state,
            shown: 0,
            total: 0,
            palette,
        }
    }

    pub fn with_counts(mut self, shown: usize, total: usize) -> Self {
        self.shown = shown;
        self.total = total;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(self.palette.surface));

        let state_style = match self.load_state {
            LoadState::Failed(_) => styles::error(self.palette),
            LoadState::Loading => styles::accent(self.palette),
            LoadState::Loaded => Style::default().fg(self.palette.success),
            LoadState::Idle => styles::text_secondary(self.palette),
        };

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.load_state.label(), state_style),
            Span::styled(
                format!("  {}/{} products", self.shown, self.total),
                styles::text_muted(self.palette),
            ),
        ]);
        Paragraph::new(left).render(area, buf);

        let right = Line::from(vec![
            Span::styled("^R", styles::keybinding(self.palette)),
            Span::styled(" Reload  ", styles::text_muted(self.palette)),
            Span::styled("Esc", styles::keybinding(self.palette)),
            Span::styled(" Clear  ", styles::text_muted(self.palette)),
            Span::styled("^C", styles::keybinding(self.palette)),
            Span::styled(" Quit ", styles::text_muted(self.palette)),
        ]);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

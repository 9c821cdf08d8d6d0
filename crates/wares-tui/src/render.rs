//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use wares_app::state::AppState;

use crate::layout;
use crate::theme::Palette;
use crate::widgets::{ErrorBanner, LoadingIndicator, ProductList, SearchBar, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Pure state -> pixels: derives the filtered view from the store and the
/// live query on every call, then branches on the load state. While
/// Loading the list is suppressed in favor of the indicator; while Failed
/// the banner sits above whatever stale list state exists.
pub fn view(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let area = frame.area();

    // Fill the terminal with the theme background
    let bg_block = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.load_state.is_failed());

    let visible = state.visible();
    let shown = visible.len();
    let total = state.products.len();

    let search_bar = SearchBar::new(&state.search, palette).with_counts(shown, total);
    frame.render_widget(search_bar, areas.search);

    if let Some(message) = state.load_state.error_message() {
        frame.render_widget(ErrorBanner::new(message, palette), areas.banner);
    }

    if state.load_state.is_loading() {
        frame.render_widget(
            LoadingIndicator::new(state.spinner_frame, palette),
            areas.body,
        );
    } else {
        let list = ProductList::new(&visible, palette)
            .selected(state.selected)
            .query(&state.search.query);
        frame.render_widget(list, areas.body);
    }

    let status = StatusBar::new(&state.load_state, palette).with_counts(shown, total);
    frame.render_widget(status, areas.status);
}

//! Scrollable product list widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use wares_core::Product;

use crate::theme::{styles, Palette};

/// Width reserved on the right of each row for the price column
const PRICE_COLUMN: usize = 10;

/// The filtered product list with a selection highlight.
///
/// Renders a window of rows sized to the widget area, scrolled so the
/// selected row is always visible.
pub struct ProductList<'a> {
    products: &'a [&'a Product],
    selected: usize,
    query: &'a str,
    palette: &'a Palette,
}

impl<'a> ProductList<'a> {
    pub fn new(products: &'a [&'a Product], palette: &'a Palette) -> Self {
        Self {
            products,
            selected: 0,
            query: "",
            palette,
        }
    }

    pub fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// The active query, used only to word the empty-state message
    pub fn query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }
}

impl Widget for ProductList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.palette, false).title(" Products ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.products.is_empty() {
            let message = if self.query.is_empty() {
                "No products loaded.".to_string()
            } else {
                format!("No products match \"{}\".", self.query)
            };
            let empty = Paragraph::new(Line::from(Span::styled(
                message,
                styles::text_muted(self.palette),
            )))
            .alignment(Alignment::Center);
            empty.render(inner, buf);
            return;
        }

        let rows = inner.height as usize;
        let offset = scroll_offset(self.selected, self.products.len(), rows);

        for (row, product) in self.products.iter().skip(offset).take(rows).enumerate() {
            let index = offset + row;
            let is_selected = index == self.selected;
            let row_area = Rect::new(inner.x, inner.y + row as u16, inner.width, 1);
            self.render_row(product, is_selected, row_area, buf);
        }
    }
}

impl ProductList<'_> {
    fn render_row(&self, product: &Product, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let width = area.width as usize;
        let price_label = format!("${:.2}", product.price);

        let marker = if is_selected { "\u{25b8} " } else { "  " };
        let brand = product
            .brand
            .as_deref()
            .map(|b| format!("  {b}"))
            .unwrap_or_default();

        // Budget in display cells, not bytes (the marker glyph is multi-byte)
        let title_budget = width.saturating_sub(2 + brand.width() + PRICE_COLUMN);
        let title = truncate_to_width(&product.title, title_budget);

        let (title_style, brand_style, price_style) = if is_selected {
            let sel = styles::selection(self.palette);
            (sel, sel, sel)
        } else {
            (
                styles::text_primary(self.palette),
                styles::text_muted(self.palette),
                styles::accent(self.palette),
            )
        };

        if is_selected {
            // Paint the whole row so the highlight spans edge to edge
            buf.set_style(area, styles::selection(self.palette));
        }

        let line = Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(title, title_style),
            Span::styled(brand, brand_style),
        ]);
        Paragraph::new(line).render(area, buf);

        let price = Line::from(Span::styled(price_label, price_style));
        Paragraph::new(price)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

/// First visible row index so the selection stays inside the window
fn scroll_offset(selected: usize, len: usize, rows: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    let max_offset = len - rows;
    selected.saturating_sub(rows - 1).min(max_offset)
}

/// Truncate a string to a display-cell budget, appending an ellipsis when
/// anything was cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width - 1; // reserve a cell for the ellipsis
    let mut width = 0;
    let mut result = String::new();
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        result.push(c);
    }
    result.push('\u{2026}');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_short_list_never_scrolls() {
        assert_eq!(scroll_offset(0, 5, 10), 0);
        assert_eq!(scroll_offset(4, 5, 10), 0);
    }

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        // 20 rows of data in a 5-row window
        assert_eq!(scroll_offset(0, 20, 5), 0);
        assert_eq!(scroll_offset(4, 20, 5), 0);
        assert_eq!(scroll_offset(5, 20, 5), 1);
        assert_eq!(scroll_offset(19, 20, 5), 15);
    }

    #[test]
    fn test_scroll_offset_zero_height_window() {
        assert_eq!(scroll_offset(3, 20, 0), 0);
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("iPhone 9", 20), "iPhone 9");
    }

    #[test]
    fn test_truncate_long_string_gets_ellipsis() {
        let truncated = truncate_to_width("Samsung Universe 9 Ultra Max", 10);
        assert!(truncated.ends_with('\u{2026}'));
        assert!(truncated.chars().count() <= 10);
    }

    #[test]
    fn test_truncate_zero_budget() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}

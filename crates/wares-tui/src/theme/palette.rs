//! Color palettes for the light and dark themes.
//!
//! The theme only changes color values; behavior is identical in both.

use ratatui::style::Color;
use wares_app::ThemeMode;

/// All colors the widgets draw with, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // Background layers
    pub background: Color,
    pub surface: Color,

    // Borders
    pub border: Color,
    pub border_active: Color,

    // Accent
    pub accent: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Selection highlight
    pub selection_fg: Color,
    pub selection_bg: Color,

    // Status
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Reset,
    surface: Color::Rgb(24, 26, 32),
    border: Color::DarkGray,
    border_active: Color::Cyan,
    accent: Color::Cyan,
    text_primary: Color::White,
    text_secondary: Color::Gray,
    text_muted: Color::DarkGray,
    selection_fg: Color::Black,
    selection_bg: Color::Cyan,
    error: Color::Red,
    warning: Color::Yellow,
    success: Color::Green,
};

pub const LIGHT: Palette = Palette {
    background: Color::Reset,
    surface: Color::Rgb(235, 235, 240),
    border: Color::Gray,
    border_active: Color::Blue,
    accent: Color::Blue,
    text_primary: Color::Black,
    text_secondary: Color::DarkGray,
    text_muted: Color::Gray,
    selection_fg: Color::White,
    selection_bg: Color::Blue,
    error: Color::Red,
    warning: Color::Rgb(160, 110, 0),
    success: Color::Rgb(0, 110, 40),
};

/// Resolve the palette for a theme mode.
///
/// `Auto` inspects the `COLORFGBG` convention some terminals export and
/// falls back to dark when nothing is advertised.
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
        ThemeMode::Auto => {
            let dark = std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| is_dark_background(&value))
                .unwrap_or(true);
            if dark {
                &DARK
            } else {
                &LIGHT
            }
        }
    }
}

/// Interpret a `COLORFGBG` value ("<fg>;<bg>", e.g. "15;0").
///
/// Background indices 0-6 and 8 are the dark half of the 16-color set.
/// Returns None when the value doesn't follow the convention.
fn is_dark_background(colorfgbg: &str) -> Option<bool> {
    let bg = colorfgbg.rsplit(';').next()?;
    let index: u8 = bg.trim().parse().ok()?;
    Some(index <= 6 || index == 8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes_pick_their_palette() {
        assert_eq!(for_mode(ThemeMode::Dark), &DARK);
        assert_eq!(for_mode(ThemeMode::Light), &LIGHT);
    }

    #[test]
    fn test_colorfgbg_dark_backgrounds() {
        assert_eq!(is_dark_background("15;0"), Some(true));
        assert_eq!(is_dark_background("0;8"), Some(true));
        assert_eq!(is_dark_background("12;default;0"), Some(true));
    }

    #[test]
    fn test_colorfgbg_light_backgrounds() {
        assert_eq!(is_dark_background("0;15"), Some(false));
        assert_eq!(is_dark_background("0;7"), Some(false));
    }

    #[test]
    fn test_colorfgbg_garbage_is_none() {
        assert_eq!(is_dark_background(""), None);
        assert_eq!(is_dark_background("nonsense"), None);
    }
}

//! Centralized theme system for the TUI.
//!
//! This module provides:
//! - `palette` — Light and dark color palettes plus terminal detection
//! - `styles` — Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;

//! wares-tui - Terminal UI for wares
//!
//! This crate provides the ratatui-based terminal interface on top of
//! wares-app: terminal lifecycle, event polling, theming, widgets, and the
//! main run loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;

//! TUI module for interactive terminal interfaces.
//!
//! Uses `ratatui` + `crossterm` for rendering.

/// Catalog browser TUI.
pub mod browser;
/// Windowed carousel controller.
pub mod carousel;

pub use browser::run_browser;

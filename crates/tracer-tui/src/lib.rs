//! tracer-tui - Terminal browser for captured error blocks
//!
//! This crate provides the ratatui-based presentation shell: it draws the
//! browse state from tracer-app, converts crossterm events into messages and
//! runs the blocking read-key, update, redraw loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run_browser;

//! Browse colours, taken from the `[general]` config section

pub mod palette;
pub mod styles;

pub use styles::Theme;

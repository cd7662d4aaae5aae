//! Windowed scrolling over a large list or a block of text.
//!
//! Both viewports are plain values: every command consumes the old state and
//! returns the new one, so the update loop never holds a half-moved window.
//!
//! - `list`: 1-D selectable list (block summaries)
//! - `pan`: 2-D pannable text (block body)

pub mod list;
pub mod pan;

pub use list::{ListCommand, ListViewport};
pub use pan::{PanCommand, PanViewport};

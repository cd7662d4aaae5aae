//! Abstract input key event, independent of terminal library.
//!
//! The browse state machine only sees `InputKey`; the TUI crate converts
//! crossterm events at its boundary.

/// Keys the browser reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
}

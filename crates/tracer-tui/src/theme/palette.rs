//! Mapping from configured colour names to terminal colours

use ratatui::style::Color;
use tracer_app::config::ColorName;

pub fn color(name: ColorName) -> Color {
    match name {
        ColorName::Black => Color::Black,
        ColorName::Blue => Color::Blue,
        ColorName::Cyan => Color::Cyan,
        ColorName::Green => Color::Green,
        ColorName::Magenta => Color::Magenta,
        ColorName::Red => Color::Red,
        ColorName::White => Color::White,
        ColorName::Yellow => Color::Yellow,
    }
}

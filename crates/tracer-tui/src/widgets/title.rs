//! Title bar

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::Theme;

const APP_TITLE: &str = "Tracer";

/// Centered application name with the block count on the right
pub struct TitleBar<'a> {
    block_count: usize,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(block_count: usize, theme: &'a Theme) -> Self {
        Self { block_count, theme }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, self.theme.inverted);

        let width = area.width as usize;
        let title_x = area.x + (width.saturating_sub(APP_TITLE.len()) / 2) as u16;
        buf.set_stringn(title_x, area.y, APP_TITLE, width, self.theme.inverted);

        // Only when it cannot collide with the centered title
        let count = format!("{} blocks ", self.block_count);
        if width > APP_TITLE.len() + count.len() * 2 {
            let count_x = area.right() - count.len() as u16;
            buf.set_string(count_x, area.y, &count, self.theme.inverted);
        }
    }
}

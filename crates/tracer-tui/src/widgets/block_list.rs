//! Block list widget
//!
//! One row per captured block: local timestamp and summary line. The row
//! under the cursor is drawn inverted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
};
use tracer_app::ListViewport;
use tracer_core::BlockSummary;

use crate::theme::Theme;

const EMPTY_MESSAGE: &str = " No error blocks captured yet";

pub struct BlockList<'a> {
    list: &'a ListViewport<BlockSummary>,
    theme: &'a Theme,
}

impl<'a> BlockList<'a> {
    pub fn new(list: &'a ListViewport<BlockSummary>, theme: &'a Theme) -> Self {
        Self { list, theme }
    }
}

impl Widget for BlockList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.normal);

        if self.list.is_empty() {
            Line::styled(EMPTY_MESSAGE, self.theme.normal).render(area, buf);
            return;
        }

        let range = self.list.visible_range();
        let first = range.start;
        for (row, summary) in self.list.visible_items().iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let style = if first + row == self.list.index() {
                self.theme.inverted
            } else {
                self.theme.normal
            };
            let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
            buf.set_style(row_area, style);
            Line::styled(format!(" {}", summary.list_text()), style).render(row_area, buf);
        }
    }
}

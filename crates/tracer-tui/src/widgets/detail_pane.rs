//! Detail pane: the body of the open block, panned in both axes

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracer_app::state::DetailView;
use unicode_width::UnicodeWidthChar;

use crate::theme::Theme;

/// Cut the display columns `[skip, skip + width)` out of `line`.
///
/// A wide character straddling the left edge leaves blanks for its visible
/// half. One straddling the right edge is dropped.
pub fn slice_columns(line: &str, skip: usize, width: usize) -> String {
    let end = skip + width;
    let mut out = String::new();
    let mut col = 0;
    for ch in line.chars() {
        let next = col + ch.width().unwrap_or(0);
        if next > end {
            break;
        }
        if col >= skip {
            out.push(ch);
        } else if next > skip {
            out.push_str(&" ".repeat(next - skip));
        }
        col = next;
    }
    out
}

pub struct DetailPane<'a> {
    view: &'a DetailView,
    theme: &'a Theme,
}

impl<'a> DetailPane<'a> {
    pub fn new(view: &'a DetailView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.normal);

        let pan = &self.view.pan;
        let first = pan.line_offset();
        for (row, line) in pan.visible_lines().iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let highlighted = self
                .view
                .highlighted
                .get(first + row)
                .copied()
                .unwrap_or(false);
            let style = if highlighted {
                self.theme.error_highlight
            } else {
                self.theme.normal
            };

            let y = area.y + row as u16;
            let text = slice_columns(line, pan.col_offset(), area.width as usize);
            buf.set_style(Rect::new(area.x, y, area.width, 1), style);
            buf.set_stringn(area.x, y, &text, area.width as usize, style);
        }
    }
}

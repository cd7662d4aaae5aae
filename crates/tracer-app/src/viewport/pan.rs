//! Pannable text viewport
//!
//! Fixed text shown through a window that can move on both axes. There is
//! no selection. Each axis is clamped to `[0, extent - window]`
//! independently.

use unicode_width::UnicodeWidthStr;

const TAB_STOP: &str = "    ";

/// Commands understood by [`PanViewport::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanCommand {
    ScrollLine(isize),
    /// Scroll by whole windows
    ScrollPage(isize),
    ScrollCol(isize),
    JumpTop,
    JumpBottom,
    Resize { height: usize, width: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanViewport {
    lines: Vec<String>,
    content_width: usize,
    line_offset: usize,
    col_offset: usize,
    window_height: usize,
    window_width: usize,
}

impl PanViewport {
    pub fn new(window_height: usize, window_width: usize) -> Self {
        Self {
            window_height: window_height.max(1),
            window_width: window_width.max(1),
            ..Self::default()
        }
    }

    /// Replace the content and return to the top-left corner.
    ///
    /// Tabs are expanded so display width matches what the terminal draws.
    pub fn set_data(mut self, text: &str) -> Self {
        self.lines = text
            .lines()
            .map(|line| line.replace('\t', TAB_STOP))
            .collect();
        self.content_width = self
            .lines
            .iter()
            .map(|line| line.width())
            .max()
            .unwrap_or(0);
        self.line_offset = 0;
        self.col_offset = 0;
        self
    }

    pub fn apply(mut self, command: PanCommand) -> Self {
        match command {
            PanCommand::ScrollLine(delta) => {
                self.line_offset = shift(self.line_offset, delta, self.max_line_offset());
            }
            PanCommand::ScrollPage(pages) => {
                let delta = pages.saturating_mul(self.window_height as isize);
                self.line_offset = shift(self.line_offset, delta, self.max_line_offset());
            }
            PanCommand::ScrollCol(delta) => {
                self.col_offset = shift(self.col_offset, delta, self.max_col_offset());
            }
            PanCommand::JumpTop => self.line_offset = 0,
            PanCommand::JumpBottom => self.line_offset = self.max_line_offset(),
            PanCommand::Resize { height, width } => {
                self.window_height = height.max(1);
                self.window_width = width.max(1);
                self.line_offset = self.line_offset.min(self.max_line_offset());
                self.col_offset = self.col_offset.min(self.max_col_offset());
            }
        }
        self
    }

    pub fn max_line_offset(&self) -> usize {
        self.lines.len().saturating_sub(self.window_height)
    }

    pub fn max_col_offset(&self) -> usize {
        self.content_width.saturating_sub(self.window_width)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn content_width(&self) -> usize {
        self.content_width
    }

    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn window_width(&self) -> usize {
        self.window_width
    }

    /// Lines inside the window, before horizontal clipping
    pub fn visible_lines(&self) -> &[String] {
        let end = (self.line_offset + self.window_height).min(self.lines.len());
        &self.lines[self.line_offset.min(end)..end]
    }
}

fn shift(value: usize, delta: isize, max: usize) -> usize {
    let moved = if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    };
    moved.min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> String {
        (0..count).map(|n| format!("line {n}\n")).collect()
    }

    #[test]
    fn test_set_data_measures_content() {
        let pan = PanViewport::new(5, 10).set_data("short\na much longer line\n");
        assert_eq!(pan.line_count(), 2);
        assert_eq!(pan.content_width(), 18);
        assert_eq!(pan.max_col_offset(), 8);
        assert_eq!(pan.max_line_offset(), 0);
    }

    #[test]
    fn test_set_data_resets_offsets() {
        let pan = PanViewport::new(3, 4)
            .set_data(&numbered(20))
            .apply(PanCommand::JumpBottom)
            .apply(PanCommand::ScrollCol(2));
        assert!(pan.line_offset() > 0);

        let pan = pan.set_data(&numbered(5));
        assert_eq!((pan.line_offset(), pan.col_offset()), (0, 0));
    }

    #[test]
    fn test_scroll_line_clamps() {
        let pan = PanViewport::new(4, 80).set_data(&numbered(10));
        let pan = pan.apply(PanCommand::ScrollLine(-3));
        assert_eq!(pan.line_offset(), 0);

        let pan = pan.apply(PanCommand::ScrollLine(100));
        assert_eq!(pan.line_offset(), 6);
        assert_eq!(pan.visible_lines().last().map(String::as_str), Some("line 9"));
    }

    #[test]
    fn test_scroll_page_moves_by_window_height() {
        let pan = PanViewport::new(4, 80)
            .set_data(&numbered(20))
            .apply(PanCommand::ScrollPage(2));
        assert_eq!(pan.line_offset(), 8);

        let pan = pan.apply(PanCommand::ScrollPage(-1));
        assert_eq!(pan.line_offset(), 4);
    }

    #[test]
    fn test_columns_step_and_clamp() {
        let text = format!("{}\n", "x".repeat(23));
        let pan = PanViewport::new(5, 10).set_data(&text);

        let pan = pan.apply(PanCommand::ScrollCol(5));
        assert_eq!(pan.col_offset(), 5);
        let pan = pan.apply(PanCommand::ScrollCol(5)).apply(PanCommand::ScrollCol(5));
        assert_eq!(pan.col_offset(), 13);
        let pan = pan.apply(PanCommand::ScrollCol(-20));
        assert_eq!(pan.col_offset(), 0);
    }

    #[test]
    fn test_content_smaller_than_window_never_moves() {
        let pan = PanViewport::new(10, 80)
            .set_data("ERROR one line\n")
            .apply(PanCommand::ScrollLine(3))
            .apply(PanCommand::ScrollCol(5))
            .apply(PanCommand::JumpBottom);
        assert_eq!((pan.line_offset(), pan.col_offset()), (0, 0));
    }

    #[test]
    fn test_jumps_only_touch_line_axis() {
        let text = format!("{}\n{}", "y".repeat(30), numbered(10));
        let pan = PanViewport::new(3, 10)
            .set_data(&text)
            .apply(PanCommand::ScrollCol(5))
            .apply(PanCommand::JumpBottom);
        assert_eq!(pan.line_offset(), 8);
        assert_eq!(pan.col_offset(), 5);

        let pan = pan.apply(PanCommand::JumpTop);
        assert_eq!((pan.line_offset(), pan.col_offset()), (0, 5));
    }

    #[test]
    fn test_resize_reclamps_both_axes() {
        let text = format!("{}\n{}", "z".repeat(40), numbered(19));
        let pan = PanViewport::new(5, 10)
            .set_data(&text)
            .apply(PanCommand::JumpBottom)
            .apply(PanCommand::ScrollCol(30));
        assert_eq!((pan.line_offset(), pan.col_offset()), (15, 30));

        let pan = pan.apply(PanCommand::Resize {
            height: 15,
            width: 35,
        });
        assert_eq!((pan.line_offset(), pan.col_offset()), (5, 5));
    }

    #[test]
    fn test_tabs_expand_and_crlf_is_stripped() {
        let pan = PanViewport::new(5, 80).set_data("ERROR x\r\n\tat a.b(c:1)\r\n");
        assert_eq!(pan.lines()[0], "ERROR x");
        assert_eq!(pan.lines()[1], "    at a.b(c:1)");
    }
}

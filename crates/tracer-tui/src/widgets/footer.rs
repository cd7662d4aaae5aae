//! Footer bar: key help for the current mode, or a status message

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};
use tracer_app::UiMode;

use crate::theme::Theme;

const LIST_HELP: &str = "j/k - move, enter - open block, n/p - open next/previous, \
                         g/G - top/bottom, r - reload, q - quit";
const DETAIL_HELP: &str = "n/p - next/previous block, enter/esc - close, hjkl - scroll, \
                           pgup/pgdn - page, q - quit";

pub struct Footer<'a> {
    mode: UiMode,
    status: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(mode: UiMode, theme: &'a Theme) -> Self {
        Self {
            mode,
            status: None,
            theme,
        }
    }

    /// Show `status` instead of the key help
    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.inverted);
        let text = match (self.status, self.mode) {
            (Some(status), _) => status,
            (None, UiMode::List) => LIST_HELP,
            (None, UiMode::Detail) => DETAIL_HELP,
        };
        Line::styled(format!(" {text}"), self.theme.inverted).render(area, buf);
    }
}

//! Horizontal separator line

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

const RULE_CHAR: &str = "─";

pub struct Rule {
    style: Style,
}

impl Rule {
    pub fn new(style: Style) -> Self {
        Self { style }
    }
}

impl Widget for Rule {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf[(x, y)].set_symbol(RULE_CHAR).set_style(self.style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_rule_spans_full_width() {
        let mut term = TestTerminal::with_size(12, 1);
        term.render_widget(Rule::new(Style::default()), term.area());
        assert!(term.line_contains(0, &RULE_CHAR.repeat(12)));
    }
}

//! Semantic styles for the block browser.

use ratatui::style::Style;
use tracer_app::config::GeneralSettings;

use super::palette::color;

/// The three colour pairs the browser draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Body text and rules
    pub normal: Style,
    /// Title bar, footer and the selected list row
    pub inverted: Style,
    /// Detail lines matching a highlight pattern
    pub error_highlight: Style,
}

impl Theme {
    pub fn from_settings(general: &GeneralSettings) -> Self {
        Self {
            normal: Style::default()
                .fg(color(general.foreground_color))
                .bg(color(general.background_color)),
            inverted: Style::default()
                .fg(color(general.foreground_inverted_color))
                .bg(color(general.background_inverted_color)),
            error_highlight: Style::default()
                .fg(color(general.foreground_error_highlight_color))
                .bg(color(general.background_error_highlight_color)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_settings(&GeneralSettings::default())
    }
}

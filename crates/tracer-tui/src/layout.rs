//! Screen layout definitions for the TUI
//!
//! Rows from the top: title, rule, block list, then (detail open) a rule and
//! the detail pane, then a rule and the footer. The list height comes from
//! `tracer_app::state::list_rows` so the viewport and the drawn area always
//! agree.

use ratatui::layout::{Constraint, Layout, Rect};
use tracer_app::state::list_rows;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub title: Rect,
    pub top_rule: Rect,
    pub list: Rect,
    /// Rule and pane, present only while a block is open
    pub detail: Option<(Rect, Rect)>,
    pub bottom_rule: Rect,
    pub footer: Rect,
}

/// Split the screen for the current mode
pub fn create(area: Rect, detail_open: bool) -> ScreenAreas {
    if detail_open {
        let list_height = list_rows(area.height, true) as u16;
        let chunks = Layout::vertical([
            Constraint::Length(1),           // Title
            Constraint::Length(1),           // Rule
            Constraint::Length(list_height), // Shrunken list
            Constraint::Length(1),           // Rule
            Constraint::Min(0),              // Detail pane
            Constraint::Length(1),           // Rule
            Constraint::Length(1),           // Footer
        ])
        .split(area);

        ScreenAreas {
            title: chunks[0],
            top_rule: chunks[1],
            list: chunks[2],
            detail: Some((chunks[3], chunks[4])),
            bottom_rule: chunks[5],
            footer: chunks[6],
        }
    } else {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0), // Block list
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        ScreenAreas {
            title: chunks[0],
            top_rule: chunks[1],
            list: chunks[2],
            detail: None,
            bottom_rule: chunks[3],
            footer: chunks[4],
        }
    }
}

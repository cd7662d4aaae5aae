//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::viewport::{ListCommand, ListViewport, PanCommand, PanViewport};
use tracer_core::{BlockId, BlockSummary, PatternSet};

/// Rows taken by the title, the two rules around the list, and the footer
pub const CHROME_ROWS: u16 = 4;

/// List height while the detail pane is open
pub const LIST_ROWS_WITH_DETAIL: u16 = 3;

/// Rows not available to the detail pane: chrome, the shrunken list and the
/// rule between list and pane
pub const DETAIL_RESERVED_ROWS: u16 = CHROME_ROWS + LIST_ROWS_WITH_DETAIL + 1;

/// Columns moved per horizontal pan key
pub const COLUMN_STEP: isize = 5;

/// Current UI mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Block list fills the screen
    #[default]
    List,
    /// Shrunken list above the body of the selected block
    Detail,
}

/// The block shown in the detail pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: BlockId,
    pub pan: PanViewport,
    /// One flag per line of `pan`, set when a highlight pattern matches
    pub highlighted: Vec<bool>,
}

impl DetailView {
    pub fn new(
        id: BlockId,
        body: &str,
        highlight: &PatternSet,
        height: usize,
        width: usize,
    ) -> Self {
        let pan = PanViewport::new(height, width).set_data(body);
        // Matched against the stored text, before tab expansion
        let highlighted = body.lines().map(|line| highlight.matches_any(line)).collect();
        Self {
            id,
            pan,
            highlighted,
        }
    }
}

/// Complete browse state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,

    /// Summaries of the most recent blocks, oldest first
    pub list: ListViewport<BlockSummary>,

    /// Open detail pane, if any
    pub detail: Option<DetailView>,

    /// Settings from the config file
    pub settings: Settings,

    /// Compiled `[highlight_patterns]`
    pub highlight: PatternSet,

    /// Terminal size in cells
    pub width: u16,
    pub height: u16,

    /// Transient message shown in the footer (fetch failures)
    pub status_message: Option<String>,

    quitting: bool,
}

impl AppState {
    pub fn new(settings: Settings, highlight: PatternSet, width: u16, height: u16) -> Self {
        let list_rows = list_rows(height, false);
        Self {
            ui_mode: UiMode::List,
            list: ListViewport::new(Vec::new(), list_rows),
            detail: None,
            settings,
            highlight,
            width,
            height,
            status_message: None,
            quitting: false,
        }
    }

    pub fn is_detail_open(&self) -> bool {
        self.ui_mode == UiMode::Detail && self.detail.is_some()
    }

    /// Height the block list should have in the current mode
    pub fn list_height(&self) -> usize {
        list_rows(self.height, self.is_detail_open())
    }

    /// `(height, width)` of the detail pane
    pub fn detail_size(&self) -> (usize, usize) {
        (
            self.height.saturating_sub(DETAIL_RESERVED_ROWS).max(1) as usize,
            self.width.max(1) as usize,
        )
    }

    pub fn selected_id(&self) -> Option<BlockId> {
        self.list.select().map(|summary| summary.id)
    }

    /// Record a new terminal size and refit both viewports
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;

        let list = std::mem::take(&mut self.list);
        self.list = list.apply(ListCommand::Resize(self.list_height()));

        let (height, width) = self.detail_size();
        if let Some(detail) = self.detail.as_mut() {
            let pan = std::mem::take(&mut detail.pan);
            detail.pan = pan.apply(PanCommand::Resize { height, width });
        }
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}

/// Block list height for a terminal of `height` rows
pub fn list_rows(height: u16, detail_open: bool) -> usize {
    let full = height.saturating_sub(CHROME_ROWS).max(1);
    if detail_open {
        LIST_ROWS_WITH_DETAIL.min(full) as usize
    } else {
        full as usize
    }
}

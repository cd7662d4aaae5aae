//! Scroll message handlers
//!
//! Applies list and pan commands to the viewports held in `AppState`.

use crate::state::{AppState, UiMode};
use crate::viewport::{ListCommand, ListViewport, PanCommand};
use tracer_core::BlockSummary;
use tracing::debug;

use super::UpdateResult;

/// Replace the list with freshly loaded summaries, cursor on the newest
pub fn handle_summaries_loaded(
    state: &mut AppState,
    summaries: Vec<BlockSummary>,
) -> UpdateResult {
    debug!("Loaded {} block summaries", summaries.len());
    state.detail = None;
    state.ui_mode = UiMode::List;
    state.status_message = None;
    state.list =
        ListViewport::new(summaries, state.list_height()).apply(ListCommand::JumpBottom);
    UpdateResult::none()
}

pub fn handle_list_command(state: &mut AppState, command: ListCommand) -> UpdateResult {
    let list = std::mem::take(&mut state.list);
    state.list = list.apply(command);
    UpdateResult::none()
}

/// Pan the detail pane; ignored while it is closed
pub fn handle_pan_command(state: &mut AppState, command: PanCommand) -> UpdateResult {
    if let Some(detail) = state.detail.as_mut() {
        let pan = std::mem::take(&mut detail.pan);
        detail.pan = pan.apply(command);
    }
    UpdateResult::none()
}

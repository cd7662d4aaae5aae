//! Detail pane handlers
//!
//! Opening is two-step: the handler asks the loop for the body
//! (`UpdateAction::LoadBody`) and the pane appears when `BodyLoaded` comes
//! back for the block that is still selected.

use crate::message::Message;
use crate::state::{AppState, DetailView, UiMode};
use crate::viewport::ListCommand;
use tracer_core::BlockId;
use tracing::debug;

use super::{scroll, UpdateAction, UpdateResult};

pub fn handle_open_detail(state: &mut AppState) -> UpdateResult {
    match state.selected_id() {
        Some(id) => UpdateResult::action(UpdateAction::LoadBody { id }),
        None => UpdateResult::none(),
    }
}

pub fn handle_close_detail(state: &mut AppState) -> UpdateResult {
    state.detail = None;
    state.ui_mode = UiMode::List;
    let height = state.list_height();
    scroll::handle_list_command(state, ListCommand::Grow(height))
}

/// Move the selection by `delta` and open whatever lands under the cursor
pub fn handle_open_relative(state: &mut AppState, delta: isize) -> UpdateResult {
    scroll::handle_list_command(state, ListCommand::MoveBy(delta));
    UpdateResult::message(Message::OpenDetail)
}

pub fn handle_body_loaded(state: &mut AppState, id: BlockId, body: String) -> UpdateResult {
    if state.selected_id() != Some(id) {
        debug!("Discarding body of block {} (no longer selected)", id);
        return UpdateResult::none();
    }

    let (height, width) = state.detail_size();
    state.detail = Some(DetailView::new(id, &body, &state.highlight, height, width));
    state.ui_mode = UiMode::Detail;
    state.status_message = None;
    let list_height = state.list_height();
    scroll::handle_list_command(state, ListCommand::Shrink(list_height))
}

pub fn handle_load_failed(state: &mut AppState, message: String) -> UpdateResult {
    state.status_message = Some(message);
    UpdateResult::none()
}

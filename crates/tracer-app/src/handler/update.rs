//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{detail, keys::handle_key, scroll, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Resize { width, height } => {
            state.resize(width, height);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Block list
        // ─────────────────────────────────────────────────────────
        Message::Reload => UpdateResult::action(UpdateAction::LoadSummaries {
            limit: state.settings.general.list_limit,
        }),
        Message::SummariesLoaded(summaries) => scroll::handle_summaries_loaded(state, summaries),
        Message::List(command) => scroll::handle_list_command(state, command),

        // ─────────────────────────────────────────────────────────
        // Detail pane
        // ─────────────────────────────────────────────────────────
        Message::OpenDetail => detail::handle_open_detail(state),
        Message::CloseDetail => detail::handle_close_detail(state),
        Message::ToggleDetail => {
            if state.is_detail_open() {
                detail::handle_close_detail(state)
            } else {
                detail::handle_open_detail(state)
            }
        }
        Message::OpenNext => detail::handle_open_relative(state, 1),
        Message::OpenPrevious => detail::handle_open_relative(state, -1),
        Message::BodyLoaded { id, body } => detail::handle_body_loaded(state, id, body),
        Message::LoadFailed { message } => detail::handle_load_failed(state, message),
        Message::Pan(command) => scroll::handle_pan_command(state, command),
    }
}

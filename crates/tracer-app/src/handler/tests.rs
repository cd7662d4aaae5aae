//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode, COLUMN_STEP};
use crate::viewport::{ListCommand, PanCommand};
use chrono::{TimeZone, Utc};
use tracer_core::{BlockId, BlockSummary, PatternSet};

fn summaries(count: i64) -> Vec<BlockSummary> {
    (1..=count)
        .map(|n| BlockSummary {
            id: BlockId(n),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            summary: format!("ERROR {n}\n"),
        })
        .collect()
}

fn loaded_state(count: i64) -> AppState {
    let mut state = AppState::new(Settings::default(), PatternSet::empty(), 80, 24);
    update(&mut state, Message::SummariesLoaded(summaries(count)));
    state
}

fn open_selected(state: &mut AppState) {
    let id = state.selected_id().unwrap();
    let body = (0..40).map(|n| format!("line {n} {}\n", "x".repeat(100))).collect();
    update(state, Message::BodyLoaded { id, body });
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_and_ctrl_c_quit() {
    let state = loaded_state(3);
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::CharCtrl('c')), Some(Message::Quit));
}

#[test]
fn test_list_mode_keys_move_selection() {
    let state = loaded_state(3);
    assert_eq!(
        handle_key(&state, InputKey::Char('k')),
        Some(Message::List(ListCommand::MoveBy(-1)))
    );
    assert_eq!(
        handle_key(&state, InputKey::Down),
        Some(Message::List(ListCommand::MoveBy(1)))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('G')),
        Some(Message::List(ListCommand::JumpBottom))
    );
    assert_eq!(
        handle_key(&state, InputKey::Home),
        Some(Message::List(ListCommand::JumpTop))
    );
    assert_eq!(
        handle_key(&state, InputKey::PageDown),
        Some(Message::List(ListCommand::PageDown))
    );
}

#[test]
fn test_list_mode_ignores_horizontal_keys() {
    let state = loaded_state(3);
    assert_eq!(handle_key(&state, InputKey::Left), None);
    assert_eq!(handle_key(&state, InputKey::Char('l')), None);
    assert_eq!(handle_key(&state, InputKey::Esc), None);
}

#[test]
fn test_detail_mode_keys_pan() {
    let mut state = loaded_state(3);
    open_selected(&mut state);
    assert_eq!(state.ui_mode, UiMode::Detail);

    assert_eq!(
        handle_key(&state, InputKey::Char('j')),
        Some(Message::Pan(PanCommand::ScrollLine(1)))
    );
    assert_eq!(
        handle_key(&state, InputKey::Right),
        Some(Message::Pan(PanCommand::ScrollCol(COLUMN_STEP)))
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('h')),
        Some(Message::Pan(PanCommand::ScrollCol(-COLUMN_STEP)))
    );
    assert_eq!(
        handle_key(&state, InputKey::PageUp),
        Some(Message::Pan(PanCommand::ScrollPage(-1)))
    );
    assert_eq!(
        handle_key(&state, InputKey::End),
        Some(Message::Pan(PanCommand::JumpBottom))
    );
    assert_eq!(handle_key(&state, InputKey::Esc), Some(Message::CloseDetail));
}

#[test]
fn test_mode_independent_keys() {
    let state = loaded_state(3);
    assert_eq!(handle_key(&state, InputKey::Enter), Some(Message::ToggleDetail));
    assert_eq!(handle_key(&state, InputKey::Char('n')), Some(Message::OpenNext));
    assert_eq!(handle_key(&state, InputKey::Char('p')), Some(Message::OpenPrevious));
    assert_eq!(handle_key(&state, InputKey::Char('r')), Some(Message::Reload));
}

// ─────────────────────────────────────────────────────────
// Update
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting() {
    let mut state = loaded_state(1);
    assert!(!state.should_quit());
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

#[test]
fn test_key_message_forwards_mapped_message() {
    let mut state = loaded_state(3);
    let result = update(&mut state, Message::Key(InputKey::Char('q')));
    assert_eq!(result.message, Some(Message::Quit));
    assert!(result.action.is_none());
}

#[test]
fn test_reload_requests_summaries_with_limit() {
    let mut state = loaded_state(1);
    let result = update(&mut state, Message::Reload);
    assert_eq!(
        result.action,
        Some(UpdateAction::LoadSummaries { limit: 5000 })
    );
}

#[test]
fn test_summaries_loaded_selects_newest() {
    let state = loaded_state(50);
    assert_eq!(state.selected_id(), Some(BlockId(50)));
    assert_eq!(state.list.window_offset(), 19);
}

#[test]
fn test_open_detail_requests_selected_body() {
    let mut state = loaded_state(4);
    let result = update(&mut state, Message::OpenDetail);
    assert_eq!(result.action, Some(UpdateAction::LoadBody { id: BlockId(4) }));
    assert_eq!(state.ui_mode, UiMode::List);
}

#[test]
fn test_body_loaded_opens_detail_and_shrinks_list() {
    let mut state = loaded_state(10);
    open_selected(&mut state);

    assert!(state.is_detail_open());
    assert_eq!(state.list.window_height(), 3);
    let detail = state.detail.as_ref().unwrap();
    assert_eq!(detail.id, BlockId(10));
    assert_eq!(detail.pan.window_height(), 16);
    assert_eq!(detail.pan.window_width(), 80);
}

#[test]
fn test_stale_body_is_discarded() {
    let mut state = loaded_state(10);
    update(
        &mut state,
        Message::BodyLoaded {
            id: BlockId(3),
            body: "ERROR 3\n".to_string(),
        },
    );
    assert!(state.detail.is_none());
    assert_eq!(state.ui_mode, UiMode::List);
}

#[test]
fn test_open_next_moves_then_opens() {
    let mut state = loaded_state(10);
    update(&mut state, Message::List(ListCommand::JumpTop));

    let result = update(&mut state, Message::OpenNext);
    assert_eq!(state.selected_id(), Some(BlockId(2)));
    assert_eq!(result.message, Some(Message::OpenDetail));
}

#[test]
fn test_pan_commands_move_open_detail() {
    let mut state = loaded_state(2);
    open_selected(&mut state);

    update(&mut state, Message::Pan(PanCommand::ScrollPage(1)));
    update(&mut state, Message::Pan(PanCommand::ScrollCol(COLUMN_STEP)));
    let pan = &state.detail.as_ref().unwrap().pan;
    assert_eq!(pan.line_offset(), 16);
    assert_eq!(pan.col_offset(), 5);
}

#[test]
fn test_pan_without_detail_is_ignored() {
    let mut state = loaded_state(2);
    let result = update(&mut state, Message::Pan(PanCommand::ScrollLine(1)));
    assert!(state.detail.is_none());
    assert!(result.message.is_none());
}

#[test]
fn test_close_detail_restores_list_height() {
    let mut state = loaded_state(30);
    open_selected(&mut state);
    update(&mut state, Message::CloseDetail);

    assert_eq!(state.ui_mode, UiMode::List);
    assert_eq!(state.list.window_height(), 20);
    assert_eq!(state.list.visible_range(), 10..30);
}

#[test]
fn test_load_failed_sets_status_and_keeps_mode() {
    let mut state = loaded_state(5);
    update(
        &mut state,
        Message::LoadFailed {
            message: "Error block 5 not found".to_string(),
        },
    );
    assert_eq!(state.status_message.as_deref(), Some("Error block 5 not found"));
    assert_eq!(state.ui_mode, UiMode::List);
    assert!(!state.should_quit());
}

#[test]
fn test_reload_closes_detail() {
    let mut state = loaded_state(5);
    open_selected(&mut state);
    update(&mut state, Message::SummariesLoaded(summaries(6)));

    assert!(state.detail.is_none());
    assert_eq!(state.selected_id(), Some(BlockId(6)));
    assert_eq!(state.list.window_height(), 20);
}

#[test]
fn test_resize_refits_both_viewports() {
    let mut state = loaded_state(30);
    open_selected(&mut state);

    update(
        &mut state,
        Message::Resize {
            width: 120,
            height: 40,
        },
    );
    let pan = &state.detail.as_ref().unwrap().pan;
    assert_eq!(pan.window_height(), 32);
    assert_eq!(pan.window_width(), 120);
    assert_eq!(state.list.window_height(), 3);

    update(&mut state, Message::CloseDetail);
    assert_eq!(state.list.window_height(), 36);
}

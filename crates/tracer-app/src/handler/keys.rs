//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode, COLUMN_STEP};
use crate::viewport::{ListCommand, PanCommand};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('r') => return Some(Message::Reload),
        InputKey::Enter => return Some(Message::ToggleDetail),
        InputKey::Char('n') => return Some(Message::OpenNext),
        InputKey::Char('p') => return Some(Message::OpenPrevious),
        _ => {}
    }

    match state.ui_mode {
        UiMode::List => handle_key_list(key),
        UiMode::Detail => handle_key_detail(key),
    }
}

/// Keys drive the selection
fn handle_key_list(key: InputKey) -> Option<Message> {
    let command = match key {
        InputKey::Up | InputKey::Char('k') => ListCommand::MoveBy(-1),
        InputKey::Down | InputKey::Char('j') => ListCommand::MoveBy(1),
        InputKey::Home | InputKey::Char('g') => ListCommand::JumpTop,
        InputKey::End | InputKey::Char('G') => ListCommand::JumpBottom,
        InputKey::PageUp => ListCommand::PageUp,
        InputKey::PageDown => ListCommand::PageDown,
        _ => return None,
    };
    Some(Message::List(command))
}

/// Keys pan the open block
fn handle_key_detail(key: InputKey) -> Option<Message> {
    let command = match key {
        InputKey::Esc => return Some(Message::CloseDetail),
        InputKey::Up | InputKey::Char('k') => PanCommand::ScrollLine(-1),
        InputKey::Down | InputKey::Char('j') => PanCommand::ScrollLine(1),
        InputKey::Left | InputKey::Char('h') => PanCommand::ScrollCol(-COLUMN_STEP),
        InputKey::Right | InputKey::Char('l') => PanCommand::ScrollCol(COLUMN_STEP),
        InputKey::Home | InputKey::Char('g') => PanCommand::JumpTop,
        InputKey::End | InputKey::Char('G') => PanCommand::JumpBottom,
        InputKey::PageUp => PanCommand::ScrollPage(-1),
        InputKey::PageDown => PanCommand::ScrollPage(1),
        _ => return None,
    };
    Some(Message::Pan(command))
}

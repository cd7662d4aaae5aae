//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping per UI mode
//! - `scroll`: List and pan viewport commands
//! - `detail`: Opening, closing and filling the detail pane

pub(crate) mod detail;
pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;
use tracer_core::BlockId;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that touch the store, performed by the loop after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Read the `limit` most recent block summaries
    LoadSummaries { limit: usize },

    /// Read the body of one block
    LoadBody { id: BlockId },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

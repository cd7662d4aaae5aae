//! Message types for the browse loop (TEA pattern)

use crate::input_key::InputKey;
use crate::viewport::{ListCommand, PanCommand};
use tracer_core::{BlockId, BlockSummary};

/// All messages that can change the browse state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit the browser
    Quit,

    // ─────────────────────────────────────────────────────────
    // Block list
    // ─────────────────────────────────────────────────────────
    /// Re-read the most recent blocks from the store
    Reload,

    /// Store returned the block list (oldest first)
    SummariesLoaded(Vec<BlockSummary>),

    /// Move or resize the block list
    List(ListCommand),

    // ─────────────────────────────────────────────────────────
    // Detail pane
    // ─────────────────────────────────────────────────────────
    /// Open the detail pane on the selected block
    OpenDetail,

    CloseDetail,

    /// Enter: open when closed, close when open
    ToggleDetail,

    /// Select the next block and show it
    OpenNext,

    /// Select the previous block and show it
    OpenPrevious,

    /// Store returned a block body
    BodyLoaded { id: BlockId, body: String },

    /// A body could not be fetched; the session keeps running
    LoadFailed { message: String },

    /// Pan the detail pane
    Pan(PanCommand),
}

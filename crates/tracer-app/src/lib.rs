//! tracer-app - Application state and orchestration for the block browser
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! browse session: pure state, messages, the update function and the list
//! and pan viewports. It also owns configuration loading and the actions
//! that read from the store.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;
pub mod viewport;

// Re-export primary types
pub use actions::BlockSource;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use viewport::{ListCommand, ListViewport, PanCommand, PanViewport};

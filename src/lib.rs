//! tracer - capture error blocks from log streams and browse them
//!
//! The binary picks one of two paths per invocation: ingest (stdin is a
//! pipe) streams lines through the segmenter into the store, browse (stdin
//! is a terminal) opens the store in the TUI.

pub mod ingest;

pub use ingest::{run_ingest, EchoStyle, IngestSummary};

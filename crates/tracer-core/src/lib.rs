//! # tracer-core - Core Domain Types
//!
//! Foundation crate for tracer. Provides the captured-block domain types,
//! error handling, logging setup, the pattern filters, and the line-by-line
//! stream segmenter that carves error blocks out of a log stream.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`BlockId`] - Store-assigned identity of a captured block
//! - [`BlockSummary`] - List-row view of a block (id, timestamp, summary line)
//! - [`ErrorBlock`] - A fully loaded block including its body
//! - [`CapturedBlock`] - A block emitted by the segmenter, not yet stored
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Pattern Filters (`patterns`)
//! - [`PatternSet`] - Named, compiled regular expressions with `matches_any`
//!
//! ### Segmenter (`segmenter`)
//! - [`Segmenter`] - Owns the segmenter state and the exclusion patterns
//! - [`step()`] - Pure state transition for a single input line
//! - [`BlockSink`] - Destination for flushed blocks
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use tracer_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod patterns;
pub mod prelude;
pub mod segmenter;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use patterns::PatternSet;
pub use segmenter::{
    classify, step, BlockSink, LineClass, LineOutcome, Segmenter, SegmenterState,
    MAX_BLOCK_LINES,
};
pub use types::{BlockId, BlockSummary, CapturedBlock, ErrorBlock};

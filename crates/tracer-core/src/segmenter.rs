//! Stream segmenter for multi-line error blocks.
//!
//! A line-by-line state machine that decides where an error block starts,
//! where it ends, and which lines belong to it. It only remembers one line
//! back: whether the previous in-block line was a stack frame. A frame line
//! may be followed by more frames or continuation lines (chained causes,
//! elision markers, blanks); anything else right after a frame closes the
//! block.
//!
//! The transition itself is the pure function [`step`]. [`Segmenter`] owns
//! the state and the exclusion patterns for a running ingest.

use tracing::{debug, warn};

use crate::error::Result;
use crate::patterns::PatternSet;
use crate::types::{BlockId, CapturedBlock};

/// Token whose presence anywhere in a line starts a new block
const START_TOKEN: &str = "ERROR";

/// Stack frame prefix (after leading whitespace)
const FRAME_PREFIX: &str = "at ";

/// Chained exception header prefix (after leading whitespace)
const CAUSE_PREFIX: &str = "Caused by: ";

/// Structured-log envelope delimiter; always closes an open block
const DELIMITER_PREFIX: char = '<';

/// Maximum lines to buffer in a block before force-flushing it
pub const MAX_BLOCK_LINES: usize = 10_000;

// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Shape of a single input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClass {
    /// Carries the error-start signature
    pub is_start: bool,
    /// Stack frame line (`at ...`)
    pub is_frame: bool,
    /// Frame, chained cause, elision marker, or blank line
    pub is_continuation: bool,
    /// Envelope delimiter (`<...`)
    pub is_delimiter: bool,
}

pub fn classify(line: &str) -> LineClass {
    let content = line.trim_start();
    let is_frame = content.starts_with(FRAME_PREFIX);
    let is_continuation = is_frame
        || content.starts_with(CAUSE_PREFIX)
        || is_elision_marker(content)
        || content.is_empty();

    LineClass {
        is_start: line.contains(START_TOKEN),
        is_frame,
        is_continuation,
        is_delimiter: line.starts_with(DELIMITER_PREFIX),
    }
}

/// `... 12 more`
fn is_elision_marker(content: &str) -> bool {
    content
        .trim_end()
        .strip_prefix("... ")
        .and_then(|rest| rest.strip_suffix(" more"))
        .is_some_and(|count| !count.is_empty() && count.bytes().all(|b| b.is_ascii_digit()))
}

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient state of one ingest run.
///
/// The buffer is only non-empty while a block is open; every flush empties it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmenterState {
    in_block: bool,
    last_line_was_frame: bool,
    buffer: Vec<String>,
}

impl SegmenterState {
    /// Idle state with nothing buffered
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_block(&self) -> bool {
        self.in_block
    }

    pub fn last_line_was_frame(&self) -> bool {
        self.last_line_was_frame
    }

    pub fn buffered_lines(&self) -> &[String] {
        &self.buffer
    }

    fn flush(&mut self) -> Option<CapturedBlock> {
        let block = CapturedBlock::from_lines(&self.buffer);
        self.buffer.clear();
        block
    }

    fn go_idle(&mut self) {
        self.in_block = false;
        self.last_line_was_frame = false;
    }
}

/// What happened to one input line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineOutcome {
    /// Block completed by this line, if any
    pub emitted: Option<CapturedBlock>,
    /// The line belongs to an open block and should be echoed as an error line
    pub flagged: bool,
    /// The line started a block that an exclusion pattern suppressed
    pub suppressed: bool,
    /// The emitted block hit [`MAX_BLOCK_LINES`] and was cut short
    pub forced_flush: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transition
// ─────────────────────────────────────────────────────────────────────────────

/// Advance the segmenter by one line.
///
/// At most one block is emitted per line: a termination flush empties the
/// buffer before a start line could flush it again.
pub fn step(
    mut state: SegmenterState,
    line: &str,
    exclude: &PatternSet,
) -> (SegmenterState, LineOutcome) {
    let class = classify(line);
    let mut outcome = LineOutcome::default();

    if state.in_block {
        if class.is_delimiter || (state.last_line_was_frame && !class.is_continuation) {
            outcome.emitted = state.flush();
            state.in_block = false;
        }
        state.last_line_was_frame = class.is_frame;
    }

    if class.is_start {
        // A start line closes whatever is still open
        if let Some(block) = state.flush() {
            debug_assert!(outcome.emitted.is_none());
            outcome.emitted = Some(block);
        }

        if exclude.matches_any(line) {
            state.go_idle();
            outcome.suppressed = true;
        } else {
            state.in_block = true;
            state.last_line_was_frame = false;
        }
    }

    outcome.flagged = state.in_block;

    if state.in_block {
        state.buffer.push(line.to_string());

        if state.buffer.len() >= MAX_BLOCK_LINES {
            debug_assert!(outcome.emitted.is_none());
            outcome.emitted = state.flush();
            outcome.forced_flush = true;
            state.go_idle();
        }
    }

    (state, outcome)
}

// ─────────────────────────────────────────────────────────────────────────────
// Segmenter
// ─────────────────────────────────────────────────────────────────────────────

/// Destination for flushed blocks
pub trait BlockSink {
    fn append(&mut self, block: &CapturedBlock) -> Result<BlockId>;
}

impl BlockSink for Vec<CapturedBlock> {
    fn append(&mut self, block: &CapturedBlock) -> Result<BlockId> {
        self.push(block.clone());
        Ok(BlockId(self.len() as i64))
    }
}

/// Owns the segmenter state and the exclusion patterns of one ingest run
#[derive(Debug, Default)]
pub struct Segmenter {
    state: SegmenterState,
    exclude: PatternSet,
}

impl Segmenter {
    pub fn new(exclude: PatternSet) -> Self {
        Self {
            state: SegmenterState::new(),
            exclude,
        }
    }

    /// Feed one line (terminator included) and get the result
    pub fn feed_line(&mut self, line: &str) -> LineOutcome {
        let state = std::mem::take(&mut self.state);
        let (next, outcome) = step(state, line, &self.exclude);
        self.state = next;

        if outcome.suppressed {
            debug!(
                "Suppressed block matching {:?}: {}",
                self.exclude.matching_names(line),
                line.trim_end()
            );
        }
        if outcome.forced_flush {
            warn!(
                "Block reached {} lines, flushing early",
                MAX_BLOCK_LINES
            );
        }

        outcome
    }

    /// Close the open block at end of input
    pub fn finish(&mut self) -> Option<CapturedBlock> {
        self.state.go_idle();
        self.state.flush()
    }

    /// Drop the open block without emitting it. Returns the dropped line count.
    pub fn abandon(&mut self) -> usize {
        let dropped = self.state.buffer.len();
        self.state = SegmenterState::new();
        dropped
    }

    pub fn state(&self) -> &SegmenterState {
        &self.state
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Captured error block types

use chrono::{DateTime, Local, Utc};

/// Store-assigned identity of a captured block.
///
/// Ids are issued in insertion order, so they double as the recency key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub i64);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A block as emitted by the segmenter, before the store assigns identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedBlock {
    /// First line of the block, terminator included
    pub summary: String,
    /// Every line of the block concatenated in input order
    pub body: String,
}

impl CapturedBlock {
    /// Build a block from its buffered lines. Returns `None` for an empty buffer.
    pub fn from_lines(lines: &[String]) -> Option<Self> {
        let summary = lines.first()?.clone();
        Some(Self {
            summary,
            body: lines.concat(),
        })
    }

    /// Number of input lines held in the body
    pub fn line_count(&self) -> usize {
        self.body.lines().count()
    }
}

/// List-row view of a stored block. The body stays in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary {
    pub id: BlockId,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
}

impl BlockSummary {
    /// Row text shown in the block list: local time, then the summary line.
    pub fn list_text(&self) -> String {
        format!(
            "{}: {}",
            self.timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S"),
            self.summary.trim_end()
        )
    }
}

/// A fully loaded block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBlock {
    pub id: BlockId,
    pub timestamp: DateTime<Utc>,
    pub summary: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_lines_keeps_terminators() {
        let lines = vec![
            "ERROR boom\n".to_string(),
            "  at foo.bar(x:1)\n".to_string(),
        ];
        let block = CapturedBlock::from_lines(&lines).unwrap();
        assert_eq!(block.summary, "ERROR boom\n");
        assert_eq!(block.body, "ERROR boom\n  at foo.bar(x:1)\n");
        assert_eq!(block.line_count(), 2);
    }

    #[test]
    fn test_from_lines_empty_is_none() {
        assert!(CapturedBlock::from_lines(&[]).is_none());
    }

    #[test]
    fn test_list_text_trims_summary_terminator() {
        let summary = BlockSummary {
            id: BlockId(3),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            summary: "ERROR boom\r\n".to_string(),
        };
        let text = summary.list_text();
        assert!(text.ends_with(": ERROR boom"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_block_id_orders_by_recency() {
        assert!(BlockId(2) > BlockId(1));
        assert_eq!(BlockId(9).to_string(), "9");
    }
}

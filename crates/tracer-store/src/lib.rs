//! tracer-store: durable SQLite storage for captured error blocks.
//!
//! One table, append-only. Rows are never updated or deleted; the integer
//! primary key is the recency order.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;
use tracing::debug;

use tracer_core::{BlockId, BlockSink, BlockSummary, CapturedBlock, ErrorBlock};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS blocks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at TEXT NOT NULL,
    summary TEXT NOT NULL,
    body TEXT NOT NULL
)";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("block {id} has malformed timestamp {value:?}")]
    Timestamp { id: BlockId, value: String },
    #[error("block {0} not found")]
    NotFound(BlockId),
}

impl From<StoreError> for tracer_core::Error {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => tracer_core::Error::BlockNotFound { id },
            other => tracer_core::Error::store(other.to_string()),
        }
    }
}

/// Row as read from SQLite, before the timestamp is parsed
struct RawRow {
    id: i64,
    created_at: String,
    summary: String,
}

fn scan_summary_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        id: row.get(0)?,
        created_at: row.get(1)?,
        summary: row.get(2)?,
    })
}

fn parse_timestamp(id: BlockId, value: String) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(&value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| StoreError::Timestamp { id, value })
}

impl RawRow {
    fn into_summary(self) -> Result<BlockSummary, StoreError> {
        let id = BlockId(self.id);
        Ok(BlockSummary {
            id,
            timestamp: parse_timestamp(id, self.created_at)?,
            summary: self.summary,
        })
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Handle to an open block store
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the store at `path`, creating the parent directory
    /// and the schema if they do not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        // Best-effort: older SQLite builds may refuse WAL.
        if let Err(e) = conn.pragma_update(None, "journal_mode", "WAL") {
            debug!("WAL journal mode refused for {}: {}", path.display(), e);
        }
        debug!("Opened store at {}", path.display());
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Persist one block, stamped with the current time.
    pub fn append(&self, summary: &str, body: &str) -> Result<BlockId, StoreError> {
        self.append_at(summary, body, Utc::now())
    }

    pub fn append_at(
        &self,
        summary: &str,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Result<BlockId, StoreError> {
        self.conn.execute(
            "INSERT INTO blocks (created_at, summary, body) VALUES (?1, ?2, ?3)",
            params![
                created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
                summary,
                body
            ],
        )?;
        Ok(BlockId(self.conn.last_insert_rowid()))
    }

    /// The `limit` most recent blocks, oldest first.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<BlockSummary>, StoreError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut stmt = self.conn.prepare(
            "SELECT id, created_at, summary
             FROM blocks
             ORDER BY id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], scan_summary_row)?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row?.into_summary()?);
        }
        summaries.reverse();
        Ok(summaries)
    }

    pub fn fetch_body(&self, id: BlockId) -> Result<String, StoreError> {
        let body = self
            .conn
            .query_row(
                "SELECT body FROM blocks WHERE id = ?1",
                params![id.0],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        body.ok_or(StoreError::NotFound(id))
    }

    pub fn get(&self, id: BlockId) -> Result<ErrorBlock, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, created_at, summary, body FROM blocks WHERE id = ?1",
                params![id.0],
                |row| {
                    Ok((
                        RawRow {
                            id: row.get(0)?,
                            created_at: row.get(1)?,
                            summary: row.get(2)?,
                        },
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;
        let (raw, body) = row.ok_or(StoreError::NotFound(id))?;
        let summary = raw.into_summary()?;
        Ok(ErrorBlock {
            id: summary.id,
            timestamp: summary.timestamp,
            summary: summary.summary,
            body,
        })
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM blocks", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl BlockSink for Store {
    fn append(&mut self, block: &CapturedBlock) -> tracer_core::Result<BlockId> {
        let id = Store::append(self, &block.summary, &block.body)?;
        debug!("Stored block {} ({} lines)", id, block.line_count());
        Ok(id)
    }
}

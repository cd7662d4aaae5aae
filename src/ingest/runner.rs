//! The ingest loop
//!
//! Lines are read in arrival order and raced against the shutdown future.
//! Each line goes through the segmenter, is echoed once, and any block it
//! completes is appended to the sink before the next line is read.

use std::future::Future;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracer_core::prelude::*;
use tracer_core::segmenter::{BlockSink, Segmenter};
use tracer_core::CapturedBlock;

use super::EchoStyle;

/// What one ingest run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines: usize,
    pub blocks: usize,
    /// Stopped by the shutdown future rather than end of input
    pub interrupted: bool,
}

/// Stream `reader` through `segmenter` into `sink`, echoing to `writer`.
///
/// At end of input the open block is stored. When `shutdown` resolves first
/// the open block is dropped and the run still ends with `Ok`.
pub async fn run_ingest<R, W, S, F>(
    mut reader: R,
    mut writer: W,
    sink: &mut S,
    mut segmenter: Segmenter,
    style: &EchoStyle,
    shutdown: F,
) -> Result<IngestSummary>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: BlockSink + ?Sized,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut summary = IngestSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = tokio::select! {
            biased;
            _ = &mut shutdown => {
                let dropped = segmenter.abandon();
                info!("Ingest interrupted, dropped {} buffered lines", dropped);
                summary.interrupted = true;
                break;
            }
            read = reader.read_until(b'\n', &mut buf) => read?,
        };

        if read == 0 {
            if let Some(block) = segmenter.finish() {
                store_block(sink, &block, &mut summary)?;
            }
            break;
        }

        summary.lines += 1;
        let line = String::from_utf8_lossy(&buf);
        let outcome = segmenter.feed_line(&line);
        if let Some(block) = outcome.emitted {
            store_block(sink, &block, &mut summary)?;
        }
        style.write_line(&mut writer, &buf, outcome.flagged).await?;
    }

    writer.flush().await?;
    info!(
        "Ingest finished: {} lines, {} blocks stored",
        summary.lines, summary.blocks
    );
    Ok(summary)
}

fn store_block<S>(sink: &mut S, block: &CapturedBlock, summary: &mut IngestSummary) -> Result<()>
where
    S: BlockSink + ?Sized,
{
    sink.append(block).context("Failed to store error block")?;
    summary.blocks += 1;
    Ok(())
}

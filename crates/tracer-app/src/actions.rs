//! Action handlers: the side-effecting half of the update loop
//!
//! `update()` only describes what it needs from the store; the loop hands
//! each `UpdateAction` to `handle_action`, which performs the read and turns
//! the outcome into the next message.

use crate::handler::UpdateAction;
use crate::message::Message;
use tracer_core::prelude::*;
use tracer_core::{BlockId, BlockSummary};
use tracer_store::Store;

/// Read access to captured blocks
pub trait BlockSource {
    /// The `limit` most recent blocks, oldest first
    fn list_recent(&self, limit: usize) -> Result<Vec<BlockSummary>>;

    fn fetch_body(&self, id: BlockId) -> Result<String>;
}

impl BlockSource for Store {
    fn list_recent(&self, limit: usize) -> Result<Vec<BlockSummary>> {
        Ok(Store::list_recent(self, limit)?)
    }

    fn fetch_body(&self, id: BlockId) -> Result<String> {
        Ok(Store::fetch_body(self, id)?)
    }
}

/// Execute an action against the store.
///
/// A failed list load is fatal. A failed body fetch becomes
/// `Message::LoadFailed` so the session keeps running.
pub fn handle_action<S>(action: &UpdateAction, source: &S) -> Result<Option<Message>>
where
    S: BlockSource + ?Sized,
{
    match action {
        UpdateAction::LoadSummaries { limit } => {
            let summaries = source
                .list_recent(*limit)
                .context("Failed to load block list")?;
            Ok(Some(Message::SummariesLoaded(summaries)))
        }

        UpdateAction::LoadBody { id } => match source.fetch_body(*id) {
            Ok(body) => Ok(Some(Message::BodyLoaded { id: *id, body })),
            Err(e) => {
                warn!("Failed to fetch body of block {}: {}", id, e);
                Ok(Some(Message::LoadFailed {
                    message: e.to_string(),
                }))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    impl BlockSource for FailingSource {
        fn list_recent(&self, _limit: usize) -> Result<Vec<BlockSummary>> {
            Err(Error::store("database is locked"))
        }

        fn fetch_body(&self, _id: BlockId) -> Result<String> {
            Err(Error::store("database is locked"))
        }
    }

    #[test]
    fn test_load_summaries_from_store() {
        let store = Store::open_in_memory().unwrap();
        store.append("ERROR a\n", "ERROR a\n").unwrap();
        store.append("ERROR b\n", "ERROR b\n").unwrap();

        let msg = handle_action(&UpdateAction::LoadSummaries { limit: 10 }, &store).unwrap();
        match msg {
            Some(Message::SummariesLoaded(summaries)) => {
                assert_eq!(summaries.len(), 2);
                assert_eq!(summaries[1].summary, "ERROR b\n");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_load_body_from_store() {
        let store = Store::open_in_memory().unwrap();
        let id = store.append("ERROR a\n", "ERROR a\n  at x(1)\n").unwrap();

        let msg = handle_action(&UpdateAction::LoadBody { id }, &store).unwrap();
        assert_eq!(
            msg,
            Some(Message::BodyLoaded {
                id,
                body: "ERROR a\n  at x(1)\n".to_string()
            })
        );
    }

    #[test]
    fn test_missing_body_is_reported_not_fatal() {
        let store = Store::open_in_memory().unwrap();
        let msg = handle_action(&UpdateAction::LoadBody { id: BlockId(5) }, &store).unwrap();
        match msg {
            Some(Message::LoadFailed { message }) => assert!(message.contains('5')),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_failed_list_load_is_fatal() {
        let err = handle_action(&UpdateAction::LoadSummaries { limit: 1 }, &FailingSource)
            .unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_failed_body_fetch_keeps_running() {
        let msg = handle_action(&UpdateAction::LoadBody { id: BlockId(1) }, &FailingSource)
            .unwrap();
        assert!(matches!(msg, Some(Message::LoadFailed { .. })));
    }
}

//! Message processing
//!
//! Runs a message through `update()`, performs the resulting actions and
//! feeds their follow-up messages back in until the state settles.

use std::collections::VecDeque;

use tracer_core::Result;

use crate::actions::{handle_action, BlockSource};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(state: &mut AppState, message: Message, source: &S) -> Result<()>
where
    S: BlockSource + ?Sized,
{
    let mut queue = VecDeque::from([message]);
    while let Some(msg) = queue.pop_front() {
        let result = handler::update(state, msg);

        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }
        if let Some(action) = result.action {
            if let Some(reply) = handle_action(&action, source)? {
                queue.push_back(reply);
            }
        }
    }
    Ok(())
}

//! Dispatcher for actions that re-enter the store
//!
//! Middleware and background fetches use the Dispatcher to queue follow-up
//! actions. The store drains the queue after every action it processes, so
//! queued actions run through the full middleware chain in order.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Sending half of the store's action queue
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action for the store
    ///
    /// Safe to call from any thread, including tokio worker threads.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}

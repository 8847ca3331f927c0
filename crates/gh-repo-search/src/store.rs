use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::AppState;
use std::sync::mpsc::{self, Receiver};

/// Store - holds application state and manages the Redux loop
///
/// Actions are processed one at a time: middleware chain first, then the
/// reducer. Actions queued through the [`Dispatcher`] (by middleware or by
/// finished fetches) are processed afterwards in arrival order.
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::channel();
        Self {
            state: initial_state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            action_rx,
        }
    }

    /// Add middleware to the store
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get the dispatcher
    #[cfg(test)]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Process an action, then everything it queued
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);
        self.process_pending();
    }

    /// Process actions queued since the last call (e.g. fetch results)
    pub fn process_pending(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &action);
    }
}

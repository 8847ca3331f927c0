//! Status Bar Reducer
//!
//! Handles status bar state updates.

use crate::actions::StatusBarAction;
use crate::state::{StatusBarState, StatusMessage};
use chrono::Local;

/// Reduce status bar state
pub fn reduce(mut state: StatusBarState, action: &StatusBarAction) -> StatusBarState {
    match action {
        StatusBarAction::Push { kind, message, ttl } => {
            state.push(StatusMessage::new(*kind, message.clone(), Local::now(), *ttl));
        }
    }
    state
}

/// Drop the current notice once it has expired
pub fn reduce_tick(mut state: StatusBarState) -> StatusBarState {
    state.expire(Local::now());
    state
}

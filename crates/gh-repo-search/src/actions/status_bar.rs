//! Status Bar Actions
//!
//! Actions for the status bar - user feedback for operations.

use crate::state::StatusKind;
use std::time::Duration;

/// Actions for the status bar
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Push a new status message, optionally expiring after `ttl`
    Push {
        kind: StatusKind,
        message: String,
        ttl: Option<Duration>,
    },
}

impl StatusBarAction {
    /// Create a success notice that disappears after `ttl`
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self::Push {
            kind: StatusKind::Success,
            message: message.into(),
            ttl: Some(ttl),
        }
    }

    /// Create a warning notice that disappears after `ttl`
    pub fn warning(message: impl Into<String>, ttl: Duration) -> Self {
        Self::Push {
            kind: StatusKind::Warning,
            message: message.into(),
            ttl: Some(ttl),
        }
    }

    /// Create an error notice that disappears after `ttl`
    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self::Push {
            kind: StatusKind::Error,
            message: message.into(),
            ttl: Some(ttl),
        }
    }

    /// Create a running notice that stays until replaced
    pub fn running(message: impl Into<String>) -> Self {
        Self::Push {
            kind: StatusKind::Running,
            message: message.into(),
            ttl: None,
        }
    }
}

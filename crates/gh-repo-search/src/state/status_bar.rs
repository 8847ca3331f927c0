//! Status Bar State

use chrono::{DateTime, Local};
use std::time::Duration;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Request in progress
    Running,
    /// Request completed successfully
    Success,
    /// Warning (e.g. rejected input)
    Warning,
    /// Request failed
    Error,
}

impl StatusKind {
    /// Get the emoji for this status kind
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Warning => "⚠️",
            Self::Error => "🚨",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Hidden from this point on; `None` keeps it until replaced
    pub expires_at: Option<DateTime<Local>>,
}

impl StatusMessage {
    /// Create a message stamped at `now`
    pub fn new(
        kind: StatusKind,
        message: impl Into<String>,
        now: DateTime<Local>,
        ttl: Option<Duration>,
    ) -> Self {
        let expires_at = ttl
            .and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .map(|ttl| now + ttl);

        Self {
            timestamp: now,
            kind,
            message: message.into(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }
}

/// Status bar state - the current notice, if any
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    current: Option<StatusMessage>,
}

impl StatusBarState {
    /// The message on display
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Show a message, replacing the previous one
    pub fn push(&mut self, message: StatusMessage) {
        self.current = Some(message);
    }

    /// Drop the message if it has expired by `now`
    pub fn expire(&mut self, now: DateTime<Local>) {
        if self.current.as_ref().is_some_and(|msg| msg.is_expired(now)) {
            self.current = None;
        }
    }
}

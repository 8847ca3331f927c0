//! Actions module
//!
//! Actions are grouped by concern:
//! - `Global`: application-wide actions (quit, focus, tick, raw keys)
//! - `TextInput`: edits of the search input field
//! - `Search`: session events, applied by the search state machine
//! - `StatusBar`: transient user feedback

pub mod global;
pub mod status_bar;
pub mod text_input;

pub use gh_search_session::SessionEvent;
pub use global::{Focus, GlobalAction};
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by concern
#[derive(Debug, Clone)]
pub enum Action {
    /// Global application actions
    Global(GlobalAction),
    /// Search input field edits
    TextInput(TextInputAction),
    /// Search session events (user intents and fetch completions)
    Search(SessionEvent),
    /// Status bar notices
    StatusBar(StatusBarAction),
}

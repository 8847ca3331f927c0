mod app;
mod search_input;
mod status_bar;

pub use app::AppState;
pub use search_input::SearchInputState;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};

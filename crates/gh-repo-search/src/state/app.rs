//! Application State

use super::{SearchInputState, StatusBarState};
use crate::actions::Focus;
use crate::theme::Theme;
use gh_search_config::AppConfig;
use gh_search_session::{PageSize, SearchSession};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Pane receiving keyboard input
    pub focus: Focus,
    pub search_input: SearchInputState,
    /// The search session; changed only through session events
    pub search: SearchSession,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub app_config: AppConfig,
}

impl AppState {
    /// Initial state for the given configuration
    ///
    /// An unsupported `default_page_size` falls back to the default size.
    pub fn new(app_config: AppConfig) -> Self {
        let page_size = PageSize::try_from(app_config.default_page_size).unwrap_or_else(|e| {
            log::warn!("{}, using {}", e, PageSize::DEFAULT);
            PageSize::DEFAULT
        });

        Self {
            running: true,
            focus: Focus::default(),
            search_input: SearchInputState::default(),
            search: SearchSession::new(page_size),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            app_config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

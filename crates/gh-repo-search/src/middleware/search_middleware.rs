//! Search Middleware
//!
//! Runs the side effects of search session events:
//! - executes fetches on its tokio runtime and reports the outcome back as
//!   `FetchSucceeded` / `FetchFailed` tagged with the request generation
//! - turns rejected input into status bar notices
//! - swallows events the session would ignore, so they never reach the reducer

use crate::actions::{Action, SessionEvent, StatusBarAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_search_client::SearchClient;
use gh_search_session::{FetchRequest, SessionError, Transition};
use std::sync::Arc;
use tokio::runtime::Runtime;

/// Middleware for all search API operations
pub struct SearchMiddleware {
    /// Tokio runtime for async operations
    runtime: Runtime,
    client: Arc<dyn SearchClient>,
}

impl SearchMiddleware {
    pub fn new(runtime: Runtime, client: Arc<dyn SearchClient>) -> Self {
        Self { runtime, client }
    }

    /// Execute a fetch in the background
    ///
    /// Every fetch settles (the client is timeout-bounded) and reports back
    /// exactly once through the dispatcher.
    fn spawn_fetch(&self, request: FetchRequest, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();

        self.runtime.spawn(async move {
            let page_request = request.to_page_request();
            log::info!(
                "SearchMiddleware: fetching {} query='{}' page={} size={}",
                request.generation,
                request.query,
                request.page,
                request.page_size
            );

            let event = match client.fetch_page(&page_request).await {
                Ok(page) => {
                    log::info!(
                        "SearchMiddleware: {} returned {} of {} repositories",
                        request.generation,
                        page.items.len(),
                        page.total_count
                    );
                    SessionEvent::FetchSucceeded {
                        generation: request.generation,
                        page,
                    }
                }
                Err(error) => {
                    log::warn!("SearchMiddleware: {} failed: {}", request.generation, error);
                    SessionEvent::FetchFailed {
                        generation: request.generation,
                        error,
                    }
                }
            };

            dispatcher.dispatch(Action::Search(event));
        });
    }

    /// Status notice for an applied fetch completion
    fn completion_notice(event: &SessionEvent, state: &AppState) -> Option<StatusBarAction> {
        let ttl = state.app_config.notice_duration();
        match event {
            SessionEvent::FetchSucceeded { page, .. } => Some(StatusBarAction::success(
                format!("Found {} repositories", page.total_count),
                ttl,
            )),
            SessionEvent::FetchFailed { error, .. } => Some(StatusBarAction::error(
                format!("Search failed: {} (r to retry)", error),
                ttl,
            )),
            _ => None,
        }
    }
}

impl Middleware for SearchMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Search(event) = action else {
            return true;
        };

        // The reducer applies the same event to the same state, so the
        // transition seen here is the one it will record. The clone holds
        // at most one page of results.
        let mut preview = state.search.clone();
        match preview.apply(event.clone()) {
            Ok(Transition::Fetch(request)) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::running(format!(
                    "Searching '{}' (page {})",
                    request.query.term(),
                    request.page
                ))));
                self.spawn_fetch(request, dispatcher);
                true
            }
            Ok(Transition::Updated) => {
                if let Some(notice) = Self::completion_notice(event, state) {
                    dispatcher.dispatch(Action::StatusBar(notice));
                }
                true
            }
            Ok(Transition::Ignored(reason)) => {
                log::debug!("SearchMiddleware: ignored ({:?})", reason);
                false
            }
            Err(SessionError::Validation(e)) => {
                dispatcher.dispatch(Action::StatusBar(StatusBarAction::warning(
                    e.to_string(),
                    state.app_config.notice_duration(),
                )));
                false
            }
            Err(SessionError::InvalidSelection(e)) => {
                log::debug!("SearchMiddleware: {}", e);
                false
            }
        }
    }
}

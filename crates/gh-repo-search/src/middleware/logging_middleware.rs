use crate::actions::{Action, GlobalAction, SessionEvent};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Fires several times a second
            Action::Global(GlobalAction::Tick) => {}
            // Pages are large, log the shape only
            Action::Search(SessionEvent::FetchSucceeded { generation, page }) => {
                log::debug!(
                    "Action: FetchSucceeded {{ generation: {}, items: {}, total: {}, has_next_page: {} }}",
                    generation,
                    page.items.len(),
                    page.total_count,
                    page.has_next_page
                );
            }
            _ => log::debug!("Action: {:?}", action),
        }

        true // Always pass action through
    }
}

use crate::actions::{Action, GlobalAction};
use crate::reducers::{search_input_reducer, search_reducer, status_bar_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Focus(focus)) => {
            log::debug!("Focus moved to {:?}", focus);
            state.focus = *focus;
        }
        Action::Global(GlobalAction::Tick) => {
            state.status_bar = status_bar_reducer::reduce_tick(state.status_bar);
        }
        // Raw keys are translated by the keyboard middleware
        Action::Global(GlobalAction::KeyPressed(_)) => {}
        Action::TextInput(input) => {
            state.search_input = search_input_reducer::reduce(state.search_input, input);
        }
        Action::Search(event) => {
            state.search = search_reducer::reduce(state.search, event);
        }
        Action::StatusBar(status_action) => {
            state.status_bar = status_bar_reducer::reduce(state.status_bar, status_action);
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Focus, SessionEvent, StatusBarAction, TextInputAction};
    use gh_search_session::Status;
    use std::time::Duration;

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_focus_change() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::Focus(Focus::Results)),
        );
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_routes_to_sub_reducers() {
        let mut state = AppState::default();
        state = reduce(state, &Action::TextInput(TextInputAction::Char('r')));
        state = reduce(
            state,
            &Action::StatusBar(StatusBarAction::success("hi", Duration::from_secs(5))),
        );
        state = reduce(
            state,
            &Action::Search(SessionEvent::SubmitSearch("tokio".into())),
        );

        assert_eq!(state.search_input.text, "r");
        assert_eq!(state.status_bar.current().unwrap().message, "hi");
        assert_eq!(state.search.status(), Status::Loading);
        assert_eq!(state.search.term(), "tokio");
    }

    #[test]
    fn test_raw_key_does_not_change_state() {
        use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::NONE,
            ))),
        );
        assert!(state.running);
        assert_eq!(state.search_input.text, "");
    }
}

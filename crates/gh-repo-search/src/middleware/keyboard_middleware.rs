//! KeyboardMiddleware - translates keyboard events into search actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C quits regardless of focus.
//!
//! ## Layer 2: Search input focus
//! Characters edit the search text, Enter submits it, Esc hands focus to the
//! result table. Up/Down still move the selection.
//!
//! ## Layer 3: Result table focus
//!
//! | Key | Action |
//! |---|---|
//! | `/` | focus search input |
//! | `j` / `↓`, `k` / `↑` | move selection |
//! | `Enter` | select highlighted (or first) row |
//! | `l` / `→`, `h` / `←` | next / previous page |
//! | `s`, `f`, `u` | sort by stars, forks, updated (again: flip direction) |
//! | `+` / `=`, `-` | larger / smaller page size |
//! | `r` | retry failed request |
//! | `q` | quit |

use crate::actions::{Action, Focus, GlobalAction, SessionEvent, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use gh_search_session::{PageSize, SortColumn};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input based on the focused pane
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match translate_key(*key, state) {
            Some(translated) => {
                log::debug!("KeyboardMiddleware: {:?} -> {:?}", key.code, translated);
                dispatcher.dispatch(translated);
            }
            None => log::trace!("KeyboardMiddleware: unbound key {:?}", key),
        }

        // Raw keys never reach the reducer
        false
    }
}

/// Map a key press to an action for the current state
pub fn translate_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    // LAYER 1: Priority keys
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }

    match state.focus {
        Focus::SearchInput => translate_input_key(key, state),
        Focus::Results => translate_results_key(key, state),
    }
}

// LAYER 2: Search input
fn translate_input_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Some(Action::Global(GlobalAction::Focus(Focus::Results))),
        KeyCode::Enter => Some(Action::Search(SessionEvent::SubmitSearch(
            state.search_input.text.clone(),
        ))),
        KeyCode::Backspace => Some(Action::TextInput(TextInputAction::Backspace)),
        KeyCode::Char('u') if ctrl => Some(Action::TextInput(TextInputAction::ClearLine)),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::TextInput(TextInputAction::Char(c)))
        }
        KeyCode::Down => select_relative(state, 1),
        KeyCode::Up => select_relative(state, -1),
        _ => None,
    }
}

// LAYER 3: Result table
fn translate_results_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let search = |event| Some(Action::Search(event));

    match key.code {
        KeyCode::Char('/') => Some(Action::Global(GlobalAction::Focus(Focus::SearchInput))),
        KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
        KeyCode::Char('j') | KeyCode::Down => select_relative(state, 1),
        KeyCode::Char('k') | KeyCode::Up => select_relative(state, -1),
        KeyCode::Enter => select_relative(state, 0),
        KeyCode::Char('l') | KeyCode::Right => search(SessionEvent::NextPage),
        KeyCode::Char('h') | KeyCode::Left => search(SessionEvent::PrevPage),
        KeyCode::Char('s') => search(SessionEvent::ChangeSort(SortColumn::Stars)),
        KeyCode::Char('f') => search(SessionEvent::ChangeSort(SortColumn::Forks)),
        KeyCode::Char('u') => search(SessionEvent::ChangeSort(SortColumn::Updated)),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            change_page_size(state.search.page_size(), PageSize::larger)
        }
        KeyCode::Char('-') => change_page_size(state.search.page_size(), PageSize::smaller),
        KeyCode::Char('r') => search(SessionEvent::Retry),
        _ => None,
    }
}

fn select_relative(state: &AppState, offset: isize) -> Option<Action> {
    state
        .search
        .neighbor_of_selection(offset)
        .map(|id| Action::Search(SessionEvent::SelectItem(id.clone())))
}

fn change_page_size(current: PageSize, step: fn(PageSize) -> PageSize) -> Option<Action> {
    let next = step(current);
    (next != current).then(|| Action::Search(SessionEvent::ChangePageSize(next)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use gh_search_session::{Page, RepositoryId, RepositoryItem};
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn item(id: &str) -> RepositoryItem {
        RepositoryItem {
            id: RepositoryId::new(id),
            name: id.to_string(),
            primary_language: None,
            languages: vec![],
            fork_count: 0,
            star_count: 0,
            updated_at: Utc::now(),
            description: None,
            license: None,
        }
    }

    /// State with three loaded results and focus on the table
    fn results_state() -> AppState {
        let mut state = AppState::default();
        state.focus = Focus::Results;
        state
            .search
            .apply(SessionEvent::SubmitSearch("tokio".into()))
            .unwrap();
        let generation = state.search.in_flight().unwrap().generation;
        state
            .search
            .apply(SessionEvent::FetchSucceeded {
                generation,
                page: Page {
                    items: vec![item("a"), item("b"), item("c")],
                    total_count: 3,
                    end_cursor: None,
                    has_next_page: false,
                },
            })
            .unwrap();
        state
    }

    fn selected_id(action: Option<Action>) -> String {
        match action {
            Some(Action::Search(SessionEvent::SelectItem(id))) => id.as_str().to_string(),
            other => panic!("expected SelectItem, got {:?}", other),
        }
    }

    #[test]
    fn test_ctrl_c_quits_from_any_focus() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for state in [AppState::default(), results_state()] {
            assert!(matches!(
                translate_key(ctrl_c, &state),
                Some(Action::Global(GlobalAction::Quit))
            ));
        }
    }

    #[test]
    fn test_input_focus_types_characters() {
        let state = AppState::default();
        // 'q' is text while typing, not quit
        assert!(matches!(
            translate_key(key(KeyCode::Char('q')), &state),
            Some(Action::TextInput(TextInputAction::Char('q')))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Backspace), &state),
            Some(Action::TextInput(TextInputAction::Backspace))
        ));
        assert!(matches!(
            translate_key(
                KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
                &state
            ),
            Some(Action::TextInput(TextInputAction::ClearLine))
        ));
    }

    #[test]
    fn test_enter_submits_input_text() {
        let mut state = AppState::default();
        state.search_input.text = "ratatui".to_string();

        match translate_key(key(KeyCode::Enter), &state) {
            Some(Action::Search(SessionEvent::SubmitSearch(term))) => assert_eq!(term, "ratatui"),
            other => panic!("expected SubmitSearch, got {:?}", other),
        }
    }

    #[test]
    fn test_esc_and_slash_switch_focus() {
        assert!(matches!(
            translate_key(key(KeyCode::Esc), &AppState::default()),
            Some(Action::Global(GlobalAction::Focus(Focus::Results)))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('/')), &results_state()),
            Some(Action::Global(GlobalAction::Focus(Focus::SearchInput)))
        ));
    }

    #[test]
    fn test_selection_movement() {
        let mut state = results_state();
        assert_eq!(selected_id(translate_key(key(KeyCode::Char('j')), &state)), "a");
        assert_eq!(selected_id(translate_key(key(KeyCode::Up), &state)), "c");
        assert_eq!(selected_id(translate_key(key(KeyCode::Enter), &state)), "a");

        state.search.select_item(&RepositoryId::new("b")).unwrap();
        assert_eq!(selected_id(translate_key(key(KeyCode::Down), &state)), "c");
        assert_eq!(selected_id(translate_key(key(KeyCode::Char('k')), &state)), "a");
        assert_eq!(selected_id(translate_key(key(KeyCode::Enter), &state)), "b");
    }

    #[test]
    fn test_no_selection_movement_without_results() {
        let mut state = AppState::default();
        state.focus = Focus::Results;
        assert!(translate_key(key(KeyCode::Char('j')), &state).is_none());
    }

    #[test]
    fn test_paging_and_sorting_keys() {
        let state = results_state();
        assert!(matches!(
            translate_key(key(KeyCode::Right), &state),
            Some(Action::Search(SessionEvent::NextPage))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('h')), &state),
            Some(Action::Search(SessionEvent::PrevPage))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('f')), &state),
            Some(Action::Search(SessionEvent::ChangeSort(SortColumn::Forks)))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('r')), &state),
            Some(Action::Search(SessionEvent::Retry))
        ));
        assert!(matches!(
            translate_key(key(KeyCode::Char('q')), &state),
            Some(Action::Global(GlobalAction::Quit))
        ));
    }

    #[test]
    fn test_page_size_keys_saturate() {
        let state = results_state();
        match translate_key(key(KeyCode::Char('+')), &state) {
            Some(Action::Search(SessionEvent::ChangePageSize(size))) => assert_eq!(size.get(), 20),
            other => panic!("expected ChangePageSize, got {:?}", other),
        }
        // Already at the smallest size
        assert!(translate_key(key(KeyCode::Char('-')), &state).is_none());
    }

    #[test]
    fn test_middleware_consumes_keys_and_dispatches() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let state = results_state();

        let pass = middleware.handle(
            &Action::Global(GlobalAction::KeyPressed(key(KeyCode::Char('s')))),
            &state,
            &dispatcher,
        );
        assert!(!pass);
        assert!(matches!(
            rx.try_recv(),
            Ok(Action::Search(SessionEvent::ChangeSort(SortColumn::Stars)))
        ));

        // Unbound key: consumed, nothing dispatched
        let pass = middleware.handle(
            &Action::Global(GlobalAction::KeyPressed(key(KeyCode::F(5)))),
            &state,
            &dispatcher,
        );
        assert!(!pass);
        assert!(rx.try_recv().is_err());

        // Other actions pass through
        assert!(middleware.handle(&Action::Global(GlobalAction::Tick), &state, &dispatcher));
    }
}

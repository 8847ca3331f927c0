//! Search Input Reducer

use crate::actions::TextInputAction;
use crate::state::SearchInputState;

pub fn reduce(mut state: SearchInputState, action: &TextInputAction) -> SearchInputState {
    match action {
        TextInputAction::Char(c) => state.push(*c),
        TextInputAction::Backspace => state.backspace(),
        TextInputAction::ClearLine => state.clear(),
    }
    state
}

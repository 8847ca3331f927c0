//! Search input field state

/// Text typed into the search field, not yet submitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInputState {
    pub text: String,
}

impl SearchInputState {
    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

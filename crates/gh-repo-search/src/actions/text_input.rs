//! Text input actions for the search field

/// Edits of the search input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    /// Character typed into input field
    Char(char),
    /// Backspace pressed - remove last character
    Backspace,
    /// Clear entire line (Ctrl+U)
    ClearLine,
}

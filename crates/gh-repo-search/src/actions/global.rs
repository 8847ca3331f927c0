//! Global actions - not tied to a single pane

use ratatui::crossterm::event::KeyEvent;

/// Pane that receives keyboard input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing goes into the search field
    #[default]
    SearchInput,
    /// Keys act on the result table
    Results,
}

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Move keyboard focus
    Focus(Focus),
    /// Periodic tick, expires notices
    Tick,
    /// Quit the application
    Quit,
}

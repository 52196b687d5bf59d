//! Terminal-agnostic keyboard input.

use crate::Event;

/// Keyboard input abstraction.
///
/// Decouples the state machine from terminal libraries (crossterm, termion,
/// etc.), so key handling stays testable without a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Character pressed with the Control modifier held.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

/// Map a game-control key to its logical event.
///
/// This is a pure lookup. Keys with no binding return `None`, and quit keys
/// are deliberately absent: quit intent belongs to the host loop and never
/// reaches the reducer.
pub fn map_key(key: KeyInput) -> Option<Event> {
    match key {
        KeyInput::Char('s' | 'S') => Some(Event::StartOrToggle),
        KeyInput::Char(' ') => Some(Event::SwitchTurns),
        KeyInput::Char('p' | 'P') => Some(Event::NextPhase),
        KeyInput::Char('b' | 'B') => Some(Event::PrevPhase),
        KeyInput::Char('o' | 'O') => Some(Event::ShowOptions),
        KeyInput::Char('a' | 'A') => Some(Event::ShowAbout),
        KeyInput::Char('e' | 'E') => Some(Event::RequestEndGame),
        _ => None,
    }
}

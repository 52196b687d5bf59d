//! Crossterm event conversion.
//!
//! Translates raw terminal key events into the reducer's [`KeyInput`]
//! alphabet. The shift modifier is already folded into the character by the
//! terminal; only the control modifier needs explicit handling, because the
//! Ctrl-C quit chord must survive the trip through the event queue.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use turnclock_app::KeyInput;

/// Convert a crossterm key event to [`KeyInput`].
///
/// Keys with no terminal-agnostic counterpart (function keys, media keys)
/// return `None` and are dropped. Press filtering happens at the call site.
pub fn convert_key(key: &KeyEvent) -> Option<KeyInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let KeyCode::Char(c) = key.code
    {
        return Some(KeyInput::Ctrl(c));
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Tab => Some(KeyInput::Tab),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

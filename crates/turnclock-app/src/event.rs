//! Application input events.
//!
//! This module defines [`Event`], the closed set of inputs that drive the
//! reducer. Everything that can happen to a session arrives as one of these
//! variants on the runtime's single event queue; exhaustive matching in the
//! reducer keeps the set honest.
//!
//! Events originate from three sources: user key presses, the one-second
//! timer, and effects feeding follow-up events back into the queue.

use crate::KeyInput;

/// Which destructive action a confirmation prompt is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    /// End the running game and reset the session.
    EndGame,
    /// Quit the application. Resolved by the host loop; the reducer treats
    /// an answered quit prompt as a no-op.
    Quit,
}

/// Events processed by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Raw key press, resolved to a logical event through the key map.
    Key(KeyInput),

    /// One-second timer tick.
    Tick,

    /// Start a new game, or toggle between running and paused.
    StartOrToggle,

    /// End the active player's turn and hand the clock to the next seat.
    SwitchTurns,

    /// Advance the active player to the next phase.
    NextPhase,

    /// Move the active player back one phase.
    PrevPhase,

    /// Ask the host to confirm ending the game.
    RequestEndGame,

    /// Reset the session to its initial state.
    EndGame,

    /// Answer to a confirmation prompt.
    Confirm {
        /// Which prompt was answered.
        kind: ConfirmKind,
        /// `true` when the user accepted.
        accepted: bool,
    },

    /// Toggle between the main screen and the options screen.
    ShowOptions,

    /// Toggle between the main screen and the about screen.
    ShowAbout,

    /// Return to the main screen and dismiss any overlay.
    ShowMain,

    /// Select the ruleset at this catalog index.
    SetRuleset(usize),

    /// Change the configured player count.
    SetPlayerCount(i64),

    /// Rename one configured player.
    SetPlayerName {
        /// Index into the configured name list.
        index: usize,
        /// Replacement name; surrounding whitespace is trimmed.
        name: String,
    },

    /// Select a color palette by name.
    SetPalette(String),

    /// Change the wall-clock format shown in the status bar.
    SetTimeFormat(String),

    /// Toggle the one-turn flag on the selected ruleset.
    SetOneTurn(bool),

    /// Enable or disable the CSV action log.
    SetLogging(bool),
}

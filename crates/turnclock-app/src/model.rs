//! Session state for the turn clock.
//!
//! [`Model`] is the single source of truth threaded through the reducer.
//! Transitions never mutate a model in place: the reducer clones the current
//! value, rewrites the clone, and hands the whole thing back, so a renderer
//! never observes a half-applied transition.

use std::time::Duration;

use turnclock_core::{Options, Palette, Ruleset};

/// Play time added by every timer tick.
pub const TICK_UNIT: Duration = Duration::from_secs(1);

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No game is running; timers hold their initial values.
    NotStarted,
    /// The clock is running.
    InProgress,
    /// The session keeps its progress but the clock is stopped.
    Paused,
}

/// Which full-screen view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Player panels, status bar, and action log.
    Main,
    /// The options editor.
    Options,
    /// Key bindings and version information.
    About,
}

/// One line of a player's on-screen action history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The player's turn counter when the entry was made.
    pub turn: u32,
    /// The player's phase index when the entry was made.
    pub phase: usize,
    /// What happened.
    pub message: String,
}

/// Per-player session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Accumulated play time across all turns.
    pub elapsed: Duration,
    /// Whether the clock currently runs against this player.
    pub is_turn: bool,
    /// Index into the active phase list.
    pub phase: usize,
    /// Turns begun so far. Zero until the player's first switch-in.
    pub turns: u32,
    /// Action history, oldest first. Cleared when the game ends.
    pub log: Vec<LogEntry>,
}

impl Player {
    /// An idle player with zeroed counters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elapsed: Duration::ZERO,
            is_turn: false,
            phase: 0,
            turns: 0,
            log: Vec::new(),
        }
    }
}

/// The whole application state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Players in seating order. Fixed for the session; a changed player
    /// count applies when the next session constructs its model.
    pub players: Vec<Player>,
    /// Cached phase list of the selected ruleset.
    pub phases: Vec<String>,
    /// Where the session is in its lifecycle.
    pub status: GameStatus,
    /// Which full-screen view is showing.
    pub screen: Screen,
    /// True from the first start until the game is ended.
    pub started: bool,
    /// The persisted configuration record.
    pub options: Options,
    /// Colors resolved from `options.palette_name`.
    pub palette: Palette,
    /// Play time summed across all players.
    pub total_time: Duration,
}

impl Model {
    /// Build the initial state from loaded options.
    ///
    /// Player 0 holds the turn from the start, mirroring the state an ended
    /// game resets to.
    pub fn new(options: Options) -> Self {
        let options = options.normalized();
        let palette = Palette::resolve(&options.palette_name);
        let phases = options.active_ruleset().map(|r| r.phases.clone()).unwrap_or_default();

        let mut players: Vec<Player> =
            options.player_names.iter().take(options.player_count).map(Player::new).collect();
        if let Some(first) = players.first_mut() {
            first.is_turn = true;
        }

        Self {
            players,
            phases,
            status: GameStatus::NotStarted,
            screen: Screen::Main,
            started: false,
            options,
            palette,
            total_time: Duration::ZERO,
        }
    }

    /// Index of the player whose turn it is.
    pub fn active_index(&self) -> Option<usize> {
        self.players.iter().position(|p| p.is_turn)
    }

    /// The player whose turn it is.
    pub fn active_player(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_turn)
    }

    /// Whether the selected ruleset moves through phases.
    pub fn uses_phases(&self) -> bool {
        self.options.active_ruleset().is_some_and(Ruleset::uses_phases)
    }

    /// Name of the phase at `index` in the cached list.
    pub fn phase_name(&self, index: usize) -> Option<&str> {
        self.phases.get(index).map(String::as_str)
    }
}

//! The persisted options record.
//!
//! Options carry everything the player can change from the options screen.
//! The record is tolerant by construction: missing fields deserialize to
//! defaults, and [`Options::normalized`] repairs whatever a hand-edited file
//! may have broken so the rest of the application can rely on its shape.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rules::Ruleset;

/// Clock format value selecting 12-hour display.
pub const TIME_FORMAT_AMPM: &str = "AMPM";

/// Clock format value selecting 24-hour display.
pub const TIME_FORMAT_24H: &str = "24-hour";

/// Largest supported player count.
///
/// Keeps the panel row legible and bounds what normalization will allocate
/// for a hand-edited count.
pub const MAX_PLAYERS: usize = 16;

/// User-editable configuration, persisted as JSON between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Index into `rules` selecting the active ruleset.
    pub default_ruleset: usize,
    /// Session copy of the rule catalog; `one_turn` is togglable per entry.
    pub rules: Vec<Ruleset>,
    /// Number of players the next game starts with.
    /// Between 1 and [`MAX_PLAYERS`] after normalization.
    pub player_count: usize,
    /// Player names; at least `player_count` entries, extras are ignored.
    pub player_names: Vec<String>,
    /// Selected palette name; unknown names fall back at resolution time.
    pub palette_name: String,
    /// Wall-clock format, [`TIME_FORMAT_AMPM`] or [`TIME_FORMAT_24H`].
    /// Stored verbatim; anything unrecognized renders as 24-hour.
    pub time_format: String,
    /// Whether game actions are appended to the CSV logbook.
    pub logging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            default_ruleset: 0,
            rules: Ruleset::catalog(),
            player_count: 2,
            player_names: vec![Self::default_player_name(0), Self::default_player_name(1)],
            palette_name: "default".to_owned(),
            time_format: TIME_FORMAT_24H.to_owned(),
            logging: false,
        }
    }
}

impl Options {
    /// The placeholder name for player `index` (zero-based).
    pub fn default_player_name(index: usize) -> String {
        format!("Player {}", index + 1)
    }

    /// The ruleset selected by `default_ruleset`, if the index is valid.
    pub fn active_ruleset(&self) -> Option<&Ruleset> {
        self.rules.get(self.default_ruleset)
    }

    /// Whether the wall clock should render in 12-hour format.
    pub fn ampm(&self) -> bool {
        self.time_format == TIME_FORMAT_AMPM
    }

    /// Repairs structural damage from a hand-edited or stale options file.
    ///
    /// Restores an empty rule list from the built-in catalog, clamps the
    /// ruleset index, clamps `player_count` into `1..=MAX_PLAYERS` and grows
    /// `player_names` to cover it. Free-form strings are left alone; their
    /// consumers fall back at use time.
    pub fn normalized(mut self) -> Self {
        if self.rules.is_empty() {
            debug!("options carried no rulesets, restoring built-in catalog");
            self.rules = Ruleset::catalog();
        }
        if self.default_ruleset >= self.rules.len() {
            debug!(
                index = self.default_ruleset,
                len = self.rules.len(),
                "ruleset index out of range, clamping"
            );
            self.default_ruleset = self.rules.len() - 1;
        }
        self.player_count = self.player_count.clamp(1, MAX_PLAYERS);
        while self.player_names.len() < self.player_count {
            let next = Self::default_player_name(self.player_names.len());
            self.player_names.push(next);
        }
        self
    }
}

//! Built-in rule catalog.
//!
//! A ruleset names a game and the ordered phases a turn moves through.
//! Games without meaningful phases (chess, go) set `one_turn` instead: the
//! clock still switches between players, but phase navigation is disabled.

use serde::{Deserialize, Serialize};

/// A named rule preset: ordered phase list plus turn-structure flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ruleset {
    /// Display name, unique within the catalog.
    pub name: String,
    /// Phases a turn moves through, in order. May be empty.
    pub phases: Vec<String>,
    /// One turn for all players: phase navigation is a no-op when set.
    pub one_turn: bool,
}

impl Ruleset {
    fn preset(name: &str, phases: &[&str], one_turn: bool) -> Self {
        Self {
            name: name.to_owned(),
            phases: phases.iter().map(|p| (*p).to_owned()).collect(),
            one_turn,
        }
    }

    /// Whether turns in this ruleset move through phases at all.
    pub fn uses_phases(&self) -> bool {
        !self.one_turn && !self.phases.is_empty()
    }

    /// The built-in catalog, in menu order.
    pub fn catalog() -> Vec<Ruleset> {
        vec![
            Self::preset(
                "Magic: The Gathering",
                &["Untap", "Upkeep", "Draw", "Main 1", "Combat", "Main 2", "End"],
                false,
            ),
            Self::preset(
                "Warhammer 40k",
                &["Command", "Movement", "Shooting", "Charge", "Fight", "Morale"],
                false,
            ),
            Self::preset(
                "Dungeons & Dragons",
                &["Movement", "Action", "Bonus Action"],
                false,
            ),
            Self::preset("Catan", &["Roll", "Trade", "Build"], false),
            Self::preset(
                "Carcassonne",
                &["Place Tile", "Place Meeple", "Score"],
                false,
            ),
            Self::preset("Chess", &[], true),
            Self::preset("Go", &[], true),
            Self::preset("Scrabble", &[], true),
        ]
    }
}

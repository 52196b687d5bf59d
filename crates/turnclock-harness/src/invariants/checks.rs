//! Standard invariants over the application model.

use std::time::Duration;

use turnclock_app::{GameStatus, Model};
use turnclock_core::MAX_PLAYERS;

use super::{Invariant, InvariantResult, Violation};

/// Exactly one player holds the turn whenever a game is started.
pub struct SingleTurnHolder;

impl Invariant for SingleTurnHolder {
    fn name(&self) -> &'static str {
        "single-turn-holder"
    }

    fn check(&self, model: &Model) -> InvariantResult {
        if !model.started {
            return Ok(());
        }
        let holders = model.players.iter().filter(|p| p.is_turn).count();
        if holders == 1 {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("{holders} players hold the turn in a started game"),
            })
        }
    }
}

/// `started` is true exactly when the status has left `NotStarted`.
pub struct StatusCoherence;

impl Invariant for StatusCoherence {
    fn name(&self) -> &'static str {
        "status-coherence"
    }

    fn check(&self, model: &Model) -> InvariantResult {
        let running = model.status != GameStatus::NotStarted;
        if model.started == running {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("started={} but status={:?}", model.started, model.status),
            })
        }
    }
}

/// Every phase cursor stays inside the cached phase list.
pub struct PhaseInBounds;

impl Invariant for PhaseInBounds {
    fn name(&self) -> &'static str {
        "phase-in-bounds"
    }

    fn check(&self, model: &Model) -> InvariantResult {
        for (index, player) in model.players.iter().enumerate() {
            let ok = if model.phases.is_empty() {
                player.phase == 0
            } else {
                player.phase < model.phases.len()
            };
            if !ok {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!(
                        "player {index} at phase {} with {} phases",
                        player.phase,
                        model.phases.len()
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Total game time equals the sum of the player clocks.
pub struct TotalIsSum;

impl Invariant for TotalIsSum {
    fn name(&self) -> &'static str {
        "total-is-sum"
    }

    fn check(&self, model: &Model) -> InvariantResult {
        let sum: Duration = model.players.iter().map(|p| p.elapsed).sum();
        if model.total_time == sum {
            Ok(())
        } else {
            Err(Violation {
                invariant: self.name(),
                message: format!("total is {:?} but clocks sum to {sum:?}", model.total_time),
            })
        }
    }
}

/// The options record keeps the shape the rest of the system relies on.
///
/// A player count between one and [`MAX_PLAYERS`], names covering the count,
/// and a selected ruleset that exists in the session catalog.
pub struct OptionsShape;

impl Invariant for OptionsShape {
    fn name(&self) -> &'static str {
        "options-shape"
    }

    fn check(&self, model: &Model) -> InvariantResult {
        let options = &model.options;
        if options.player_count == 0 {
            return Err(Violation {
                invariant: self.name(),
                message: "player count dropped to zero".to_owned(),
            });
        }
        if options.player_count > MAX_PLAYERS {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "player count {} above the cap of {MAX_PLAYERS}",
                    options.player_count
                ),
            });
        }
        if options.player_names.len() < options.player_count {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "{} names for {} players",
                    options.player_names.len(),
                    options.player_count
                ),
            });
        }
        if options.active_ruleset().is_none() {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "ruleset index {} outside catalog of {}",
                    options.default_ruleset,
                    options.rules.len()
                ),
            });
        }
        Ok(())
    }
}

//! Fuzz target for the reducer state machine
//!
//! Drives arbitrary event sequences through `update` and checks the model
//! after every step.
//!
//! # Strategy
//!
//! - Event mix: game flow, raw key presses, screen switches, and options
//!   edits interleaved in any order
//! - Hostile values: huge player counts, negative deltas, unknown palette
//!   and format names, out-of-range ruleset indices, arbitrary name bytes
//! - Effects: emitted follow-up events are fed straight back in, the way
//!   the runtime queue would
//!
//! # Invariants
//!
//! - Exactly one turn holder once a game is started
//! - The started flag agrees with the status
//! - Phase cursors stay inside the cached phase list
//! - Total game time equals the sum of the player clocks
//! - Options keep the player count in range, names covering the count, and
//!   a selected ruleset that exists in the catalog

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use turnclock_app::{ConfirmKind, Effect, Event, GameStatus, KeyInput, Model, update};
use turnclock_core::{MAX_PLAYERS, Options};

#[derive(Debug, Clone, Arbitrary)]
enum Op {
    Key(char),
    Tick,
    StartOrToggle,
    SwitchTurns,
    NextPhase,
    PrevPhase,
    RequestEndGame,
    ConfirmEndGame { accepted: bool },
    ShowOptions,
    ShowAbout,
    ShowMain,
    SetRuleset(usize),
    SetPlayerCount(i64),
    SetPlayerName { index: u8, name: String },
    SetPalette(String),
    SetTimeFormat(String),
    SetOneTurn(bool),
    SetLogging(bool),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut model = Model::new(Options::default());
    let mut pending: Vec<Event> = Vec::new();

    for op in ops {
        pending.push(to_event(op));
        while let Some(event) = pending.pop() {
            let step = update(&model, event);
            model = step.model;
            if let Some(Effect::Emit(next)) = step.effect {
                pending.push(next);
            }
            check(&model);
        }
    }
});

fn to_event(op: Op) -> Event {
    match op {
        Op::Key(c) => Event::Key(KeyInput::Char(c)),
        Op::Tick => Event::Tick,
        Op::StartOrToggle => Event::StartOrToggle,
        Op::SwitchTurns => Event::SwitchTurns,
        Op::NextPhase => Event::NextPhase,
        Op::PrevPhase => Event::PrevPhase,
        Op::RequestEndGame => Event::RequestEndGame,
        Op::ConfirmEndGame { accepted } => {
            Event::Confirm { kind: ConfirmKind::EndGame, accepted }
        }
        Op::ShowOptions => Event::ShowOptions,
        Op::ShowAbout => Event::ShowAbout,
        Op::ShowMain => Event::ShowMain,
        Op::SetRuleset(index) => Event::SetRuleset(index),
        Op::SetPlayerCount(count) => Event::SetPlayerCount(count),
        Op::SetPlayerName { index, name } => {
            Event::SetPlayerName { index: usize::from(index), name }
        }
        Op::SetPalette(name) => Event::SetPalette(name),
        Op::SetTimeFormat(format) => Event::SetTimeFormat(format),
        Op::SetOneTurn(one_turn) => Event::SetOneTurn(one_turn),
        Op::SetLogging(logging) => Event::SetLogging(logging),
    }
}

fn check(model: &Model) {
    if model.started {
        let holders = model.players.iter().filter(|p| p.is_turn).count();
        assert_eq!(holders, 1, "{holders} turn holders in a started game");
    }

    let running = model.status != GameStatus::NotStarted;
    assert_eq!(model.started, running, "started flag disagrees with {:?}", model.status);

    for (index, player) in model.players.iter().enumerate() {
        if model.phases.is_empty() {
            assert_eq!(player.phase, 0, "player {index} has a phase without a phase list");
        } else {
            assert!(
                player.phase < model.phases.len(),
                "player {index} at phase {} of {}",
                player.phase,
                model.phases.len()
            );
        }
    }

    let sum: Duration = model.players.iter().map(|p| p.elapsed).sum();
    assert_eq!(model.total_time, sum, "total time drifted from the player clocks");

    let options = &model.options;
    assert!(options.player_count >= 1, "player count dropped to zero");
    assert!(
        options.player_count <= MAX_PLAYERS,
        "player count {} above the cap",
        options.player_count
    );
    assert!(
        options.player_names.len() >= options.player_count,
        "{} names for {} players",
        options.player_names.len(),
        options.player_count
    );
    assert!(options.active_ruleset().is_some(), "selected ruleset left the catalog");
}

//! The reducer.
//!
//! A single pure function maps the current [`Model`] and one [`Event`] to a
//! [`Step`]: the next model, an optional [`Effect`], and the logbook rows the
//! transition produced. Events that do not apply in the current state return
//! the model unchanged rather than failing; a stray message must never be
//! able to take the session down.
//!
//! Destructive actions go through a confirmation round-trip: the key press
//! only yields an [`Effect::Confirm`], the host shows the prompt, and the
//! answer re-enters the queue as [`Event::Confirm`]. The actual reset lives
//! in one place regardless of how it was solicited.

use std::time::Duration;

use tracing::debug;
use turnclock_core::{LogRecord, MAX_PLAYERS, Options, Palette};

use crate::{
    ConfirmKind, Effect, Event, GameStatus, LogEntry, Model, Screen, Step, TICK_UNIT,
    input::map_key,
};

/// Apply one event to the model.
///
/// Never fails. The input model is left untouched; the returned step owns a
/// freshly built value.
pub fn update(model: &Model, event: Event) -> Step {
    match event {
        Event::Key(key) => match map_key(key) {
            Some(mapped) => Step::next(model.clone()).with_effect(Effect::Emit(mapped)),
            None => Step::next(model.clone()),
        },
        Event::Tick => tick(model),
        Event::StartOrToggle => start_or_toggle(model),
        Event::SwitchTurns => switch_turns(model),
        Event::NextPhase => move_phase(model, PhaseDirection::Forward),
        Event::PrevPhase => move_phase(model, PhaseDirection::Back),
        Event::RequestEndGame => request_end_game(model),
        Event::EndGame => end_game(model),
        Event::Confirm { kind, accepted } => confirm(model, kind, accepted),
        Event::ShowOptions => toggle_screen(model, Screen::Options),
        Event::ShowAbout => toggle_screen(model, Screen::About),
        Event::ShowMain => show_main(model),
        Event::SetRuleset(index) => set_ruleset(model, index),
        Event::SetPlayerCount(count) => set_player_count(model, count),
        Event::SetPlayerName { index, name } => set_player_name(model, index, &name),
        Event::SetPalette(name) => set_palette(model, name),
        Event::SetTimeFormat(format) => set_time_format(model, format),
        Event::SetOneTurn(value) => set_one_turn(model, value),
        Event::SetLogging(value) => set_logging(model, value),
    }
}

/// Which way a phase event moves.
enum PhaseDirection {
    Forward,
    Back,
}

/// Append `message` to a player's on-screen history and the step's records.
fn log_player(model: &mut Model, records: &mut Vec<LogRecord>, index: usize, message: &str) {
    let Model { players, phases, .. } = model;
    let Some(player) = players.get_mut(index) else { return };
    let phase_name = phases.get(player.phase).cloned().unwrap_or_default();

    player
        .log
        .push(LogEntry { turn: player.turns, phase: player.phase, message: message.to_owned() });
    records.push(LogRecord {
        player: player.name.clone(),
        turn: player.turns,
        phase: phase_name,
        message: message.to_owned(),
    });
}

/// One-second tick. Only a running game accumulates time.
fn tick(model: &Model) -> Step {
    if !(model.started && model.status == GameStatus::InProgress) {
        return Step::next(model.clone());
    }

    let mut next = model.clone();
    next.total_time += TICK_UNIT;
    for player in next.players.iter_mut().filter(|p| p.is_turn) {
        player.elapsed += TICK_UNIT;
    }
    Step::next(next)
}

/// Start a fresh game, or flip between running and paused.
fn start_or_toggle(model: &Model) -> Step {
    let mut next = model.clone();
    let mut records = Vec::new();
    let active = next.active_index();

    match next.status {
        GameStatus::NotStarted => {
            next.status = GameStatus::InProgress;
            next.started = true;
            if let Some(index) = active {
                log_player(&mut next, &mut records, index, "Game started");
            }
            debug!("game started");
        },
        GameStatus::InProgress => {
            next.status = GameStatus::Paused;
            if let Some(index) = active {
                log_player(&mut next, &mut records, index, "Game paused");
            }
        },
        GameStatus::Paused => {
            next.status = GameStatus::InProgress;
            if let Some(index) = active {
                log_player(&mut next, &mut records, index, "Game resumed");
            }
        },
    }

    Step { model: next, effect: None, records }
}

/// End the active player's turn and hand the clock to the next seat.
///
/// Turn order is seating order; the last seat hands back to the first. A
/// state with no turn holder hands the first turn to seat 0.
fn switch_turns(model: &Model) -> Step {
    let Some(last) = model.players.len().checked_sub(1) else {
        return Step::next(model.clone());
    };

    let mut next = model.clone();
    let mut records = Vec::new();

    let outgoing = next.active_index();
    if let Some(current) = outgoing {
        let ended = next.players.get(current).map_or(0, |p| p.turns);
        log_player(&mut next, &mut records, current, &format!("Turn {ended} ended"));
        if let Some(player) = next.players.get_mut(current) {
            player.is_turn = false;
        }
    }

    let incoming = outgoing.map_or(0, |current| if current == last { 0 } else { current + 1 });
    let mut begun = 0;
    if let Some(player) = next.players.get_mut(incoming) {
        player.is_turn = true;
        player.turns += 1;
        player.phase = 0;
        begun = player.turns;
    }
    log_player(&mut next, &mut records, incoming, &format!("Turn {begun} started"));
    if next.uses_phases()
        && let Some(first) = next.phases.first().cloned()
    {
        log_player(&mut next, &mut records, incoming, &format!("Entered phase: {first}"));
    }

    // Interrupting an options or about view to show turn status is intended.
    next.screen = Screen::Main;

    Step { model: next, effect: None, records }
}

/// Move the active player one phase forward or back. No wraparound.
fn move_phase(model: &Model, direction: PhaseDirection) -> Step {
    if !model.uses_phases() {
        return Step::next(model.clone());
    }
    let Some(current) = model.active_index() else {
        return Step::next(model.clone());
    };

    let mut next = model.clone();
    let mut records = Vec::new();

    let target = next.players.get(current).and_then(|player| match direction {
        PhaseDirection::Forward if player.phase + 1 < next.phases.len() => Some(player.phase + 1),
        PhaseDirection::Back if player.phase > 0 => Some(player.phase - 1),
        _ => None,
    });
    if let Some(target) = target {
        if let Some(player) = next.players.get_mut(current) {
            player.phase = target;
        }
        if let Some(name) = next.phases.get(target).cloned() {
            log_player(&mut next, &mut records, current, &format!("Started phase: {name}"));
        }
    }
    next.screen = Screen::Main;

    Step { model: next, effect: None, records }
}

/// Ask the host to confirm ending the game. Meaningless before a start.
fn request_end_game(model: &Model) -> Step {
    if !model.started {
        return Step::next(model.clone());
    }
    Step::next(model.clone()).with_effect(Effect::Confirm(ConfirmKind::EndGame))
}

/// Apply or discard an answered confirmation prompt.
fn confirm(model: &Model, kind: ConfirmKind, accepted: bool) -> Step {
    match kind {
        ConfirmKind::EndGame if accepted => end_game(model),
        // Quit prompts are resolved by the host loop before the reducer; a
        // declined prompt of either kind changes nothing.
        ConfirmKind::EndGame | ConfirmKind::Quit => Step::next(model.clone()),
    }
}

/// Reset the session to its initial state.
///
/// The single end-of-game code path, shared by the direct event and the
/// confirmation round-trip. Records carry each player's final counters,
/// taken before the reset clears them.
fn end_game(model: &Model) -> Step {
    if !model.started {
        return Step::next(model.clone());
    }

    let mut next = model.clone();
    let mut records = Vec::new();

    for index in 0..next.players.len() {
        let message = if index == 0 { "reset to initial state" } else { "Game ended" };
        log_player(&mut next, &mut records, index, message);
    }
    for (index, player) in next.players.iter_mut().enumerate() {
        player.elapsed = Duration::ZERO;
        player.turns = 0;
        player.phase = 0;
        player.is_turn = index == 0;
        player.log.clear();
    }
    next.status = GameStatus::NotStarted;
    next.started = false;
    next.total_time = Duration::ZERO;
    debug!("game ended, session reset");

    Step { model: next, effect: None, records }
}

/// Flip between the main screen and `target`.
fn toggle_screen(model: &Model, target: Screen) -> Step {
    let mut next = model.clone();
    next.screen = if next.screen == target { Screen::Main } else { target };
    Step::next(next)
}

/// Return to the main screen and tell the host to drop any overlay.
fn show_main(model: &Model) -> Step {
    let mut next = model.clone();
    next.screen = Screen::Main;
    Step::next(next).with_effect(Effect::RestoreMain)
}

/// Select a ruleset and recompute the cached phase list.
fn set_ruleset(model: &Model, index: usize) -> Step {
    if index >= model.options.rules.len() {
        return Step::next(model.clone());
    }

    let mut next = model.clone();
    next.options.default_ruleset = index;
    next.phases = next.options.active_ruleset().map(|r| r.phases.clone()).unwrap_or_default();

    // Keep phase cursors inside the new, possibly shorter, list.
    let last = next.phases.len().saturating_sub(1);
    for player in &mut next.players {
        player.phase = player.phase.min(last);
    }

    Step::next(next)
}

/// Update the configured player count.
///
/// Grows the name list to cover the count, never shrinks it. Seated players
/// are left alone; the count applies when the next session builds its model.
fn set_player_count(model: &Model, count: i64) -> Step {
    let Ok(count) = usize::try_from(count) else {
        return Step::next(model.clone());
    };
    if count == 0 || count > MAX_PLAYERS {
        return Step::next(model.clone());
    }

    let mut next = model.clone();
    next.options.player_count = count;
    while next.options.player_names.len() < count {
        let name = Options::default_player_name(next.options.player_names.len());
        next.options.player_names.push(name);
    }

    Step::next(next)
}

/// Rename one configured player.
fn set_player_name(model: &Model, index: usize, name: &str) -> Step {
    if index >= model.options.player_names.len() {
        return Step::next(model.clone());
    }

    let mut next = model.clone();
    if let Some(slot) = next.options.player_names.get_mut(index) {
        *slot = name.trim().to_owned();
    }
    Step::next(next)
}

/// Select a palette, resolving unknown names to the default palette.
fn set_palette(model: &Model, name: String) -> Step {
    let mut next = model.clone();
    next.palette = Palette::resolve(&name);
    next.options.palette_name = name;
    Step::next(next)
}

/// Store the wall-clock format verbatim; rendering falls back on unknowns.
fn set_time_format(model: &Model, format: String) -> Step {
    let mut next = model.clone();
    next.options.time_format = format;
    Step::next(next)
}

/// Toggle the one-turn flag on the currently selected ruleset entry.
fn set_one_turn(model: &Model, value: bool) -> Step {
    let mut next = model.clone();
    let index = next.options.default_ruleset;
    let Some(rule) = next.options.rules.get_mut(index) else {
        return Step::next(model.clone());
    };
    rule.one_turn = value;
    Step::next(next)
}

/// Enable or disable the CSV action log.
fn set_logging(model: &Model, value: bool) -> Step {
    let mut next = model.clone();
    next.options.logging = value;
    Step::next(next)
}

#[cfg(test)]
mod tests {
    use turnclock_core::Options;

    use super::*;
    use crate::KeyInput;

    fn base() -> Model {
        Model::new(Options::default())
    }

    /// Apply a sequence of events, discarding effects and records.
    fn run(model: Model, events: &[Event]) -> Model {
        events.iter().fold(model, |m, e| update(&m, e.clone()).model)
    }

    fn last_message(player: &crate::Player) -> &str {
        player.log.last().map_or("", |entry| entry.message.as_str())
    }

    #[test]
    fn start_begins_the_game_and_logs_it() {
        let step = update(&base(), Event::StartOrToggle);

        assert_eq!(step.model.status, GameStatus::InProgress);
        assert!(step.model.started);
        assert_eq!(last_message(&step.model.players[0]), "Game started");
        assert_eq!(step.records.len(), 1);
        assert_eq!(step.records[0].player, "Player 1");
        assert_eq!(step.records[0].message, "Game started");
        assert!(step.effect.is_none());
    }

    #[test]
    fn toggle_pauses_and_resumes_without_clearing_started() {
        let started = update(&base(), Event::StartOrToggle).model;

        let paused = update(&started, Event::StartOrToggle);
        assert_eq!(paused.model.status, GameStatus::Paused);
        assert!(paused.model.started, "pausing must not end the game");
        assert_eq!(last_message(&paused.model.players[0]), "Game paused");

        let resumed = update(&paused.model, Event::StartOrToggle);
        assert_eq!(resumed.model.status, GameStatus::InProgress);
        assert_eq!(last_message(&resumed.model.players[0]), "Game resumed");
    }

    #[test]
    fn tick_adds_one_unit_to_the_active_player_and_total() {
        let started = update(&base(), Event::StartOrToggle).model;

        let ticked = update(&started, Event::Tick).model;
        assert_eq!(ticked.players[0].elapsed, TICK_UNIT);
        assert_eq!(ticked.players[1].elapsed, Duration::ZERO);
        assert_eq!(ticked.total_time, TICK_UNIT);
    }

    #[test]
    fn tick_is_inert_before_start_and_while_paused() {
        let fresh = base();
        assert_eq!(update(&fresh, Event::Tick).model, fresh);

        let paused = run(fresh, &[Event::StartOrToggle, Event::StartOrToggle]);
        let after = update(&paused, Event::Tick).model;
        assert_eq!(after, paused, "a paused clock must not advance");
    }

    #[test]
    fn switch_hands_the_turn_to_the_next_seat() {
        let started = update(&base(), Event::StartOrToggle).model;

        let step = update(&started, Event::SwitchTurns);
        let next = &step.model;

        assert!(!next.players[0].is_turn);
        assert!(next.players[1].is_turn);
        assert_eq!(next.players[1].turns, 1);
        assert_eq!(next.players[1].phase, 0);

        let messages: Vec<&str> = step.records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["Turn 0 ended", "Turn 1 started", "Entered phase: Untap"]);
    }

    #[test]
    fn switch_wraps_from_the_last_seat_to_the_first() {
        let model = run(base(), &[Event::StartOrToggle, Event::SwitchTurns, Event::SwitchTurns]);

        assert_eq!(model.active_index(), Some(0));
        assert_eq!(model.players[0].turns, 1);
    }

    #[test]
    fn switch_skips_the_phase_entry_log_for_one_turn_rulesets() {
        // Chess sits at index 5 of the built-in catalog.
        let model = run(base(), &[Event::SetRuleset(5), Event::StartOrToggle]);

        let step = update(&model, Event::SwitchTurns);
        let messages: Vec<&str> = step.records.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, ["Turn 0 ended", "Turn 1 started"]);
    }

    #[test]
    fn switch_forces_the_main_screen() {
        let model = run(base(), &[Event::StartOrToggle, Event::ShowOptions]);
        assert_eq!(model.screen, Screen::Options);

        let after = update(&model, Event::SwitchTurns).model;
        assert_eq!(after.screen, Screen::Main);
    }

    #[test]
    fn next_phase_advances_and_logs_the_new_phase() {
        let started = update(&base(), Event::StartOrToggle).model;

        let step = update(&started, Event::NextPhase);
        assert_eq!(step.model.players[0].phase, 1);
        assert_eq!(step.records.len(), 1);
        assert_eq!(step.records[0].message, "Started phase: Upkeep");
    }

    #[test]
    fn next_phase_at_the_last_index_does_not_wrap() {
        let mut model = update(&base(), Event::StartOrToggle).model;
        model.players[0].phase = model.phases.len() - 1;

        let step = update(&model, Event::NextPhase);
        assert_eq!(step.model, model, "advancing past the end must change nothing");
        assert!(step.records.is_empty());
    }

    #[test]
    fn prev_phase_at_index_zero_does_not_wrap() {
        let started = update(&base(), Event::StartOrToggle).model;

        let step = update(&started, Event::PrevPhase);
        assert_eq!(step.model, started);
        assert!(step.records.is_empty());
    }

    #[test]
    fn prev_phase_retreats_by_one() {
        let model = run(base(), &[Event::StartOrToggle, Event::NextPhase, Event::NextPhase]);
        assert_eq!(model.players[0].phase, 2);

        let step = update(&model, Event::PrevPhase);
        assert_eq!(step.model.players[0].phase, 1);
        assert_eq!(step.records[0].message, "Started phase: Upkeep");
    }

    #[test]
    fn phase_events_are_inert_for_one_turn_rulesets() {
        let model = run(base(), &[Event::SetRuleset(5), Event::StartOrToggle]);

        let step = update(&model, Event::NextPhase);
        assert_eq!(step.model, model);
    }

    #[test]
    fn request_end_game_asks_for_confirmation_once_started() {
        let fresh = base();
        let idle = update(&fresh, Event::RequestEndGame);
        assert_eq!(idle.model, fresh);
        assert!(idle.effect.is_none(), "nothing to end before a start");

        let started = update(&fresh, Event::StartOrToggle).model;
        let step = update(&started, Event::RequestEndGame);
        assert_eq!(step.effect, Some(Effect::Confirm(ConfirmKind::EndGame)));
        assert_eq!(step.model, started, "asking must not change state");
    }

    #[test]
    fn declined_confirmation_changes_nothing() {
        let started = update(&base(), Event::StartOrToggle).model;

        let step =
            update(&started, Event::Confirm { kind: ConfirmKind::EndGame, accepted: false });
        assert_eq!(step.model, started);
        assert!(step.records.is_empty());
    }

    #[test]
    fn accepted_confirmation_resets_the_session() {
        let played = run(base(), &[
            Event::StartOrToggle,
            Event::Tick,
            Event::NextPhase,
            Event::SwitchTurns,
            Event::Tick,
        ]);

        let step = update(&played, Event::Confirm { kind: ConfirmKind::EndGame, accepted: true });
        let reset = &step.model;

        assert_eq!(reset.status, GameStatus::NotStarted);
        assert!(!reset.started);
        assert_eq!(reset.total_time, Duration::ZERO);
        for (index, player) in reset.players.iter().enumerate() {
            assert_eq!(player.elapsed, Duration::ZERO);
            assert_eq!(player.turns, 0);
            assert_eq!(player.phase, 0);
            assert!(player.log.is_empty());
            assert_eq!(player.is_turn, index == 0);
        }
    }

    #[test]
    fn end_game_records_each_player_with_final_counters() {
        let played = run(base(), &[Event::StartOrToggle, Event::SwitchTurns]);

        let step = update(&played, Event::EndGame);
        assert_eq!(step.records.len(), 2);
        assert_eq!(step.records[0].player, "Player 1");
        assert_eq!(step.records[0].message, "reset to initial state");
        assert_eq!(step.records[1].player, "Player 2");
        assert_eq!(step.records[1].message, "Game ended");
        assert_eq!(step.records[1].turn, 1, "records keep pre-reset counters");
    }

    #[test]
    fn end_game_before_start_is_inert() {
        let fresh = base();
        let step = update(&fresh, Event::EndGame);
        assert_eq!(step.model, fresh);
        assert!(step.records.is_empty());
    }

    #[test]
    fn quit_confirmations_do_not_touch_the_model() {
        let started = update(&base(), Event::StartOrToggle).model;

        for accepted in [true, false] {
            let step = update(&started, Event::Confirm { kind: ConfirmKind::Quit, accepted });
            assert_eq!(step.model, started);
            assert!(step.effect.is_none());
        }
    }

    #[test]
    fn bound_keys_emit_their_logical_event() {
        let fresh = base();
        let step = update(&fresh, Event::Key(KeyInput::Char('s')));

        assert_eq!(step.model, fresh, "key resolution alone changes nothing");
        assert_eq!(step.effect, Some(Effect::Emit(Event::StartOrToggle)));
    }

    #[test]
    fn unbound_keys_are_inert() {
        let fresh = base();
        let step = update(&fresh, Event::Key(KeyInput::Char('z')));

        assert_eq!(step.model, fresh);
        assert!(step.effect.is_none());
    }

    #[test]
    fn screen_toggle_twice_returns_the_identical_model() {
        let fresh = base();
        let model = run(fresh.clone(), &[Event::ShowOptions, Event::ShowOptions]);
        assert_eq!(model, fresh);

        let model = run(fresh.clone(), &[Event::ShowAbout, Event::ShowAbout]);
        assert_eq!(model, fresh);
    }

    #[test]
    fn about_replaces_options_rather_than_toggling_to_main() {
        let model = run(base(), &[Event::ShowOptions, Event::ShowAbout]);
        assert_eq!(model.screen, Screen::About);
    }

    #[test]
    fn show_main_emits_the_restore_effect() {
        let model = update(&base(), Event::ShowOptions).model;

        let step = update(&model, Event::ShowMain);
        assert_eq!(step.model.screen, Screen::Main);
        assert_eq!(step.effect, Some(Effect::RestoreMain));
    }

    #[test]
    fn set_ruleset_rebuilds_the_phase_cache() {
        // Dungeons & Dragons sits at index 2 with three phases.
        let step = update(&base(), Event::SetRuleset(2));

        assert_eq!(step.model.options.default_ruleset, 2);
        assert_eq!(step.model.phases, ["Movement", "Action", "Bonus Action"]);
    }

    #[test]
    fn set_ruleset_clamps_player_phase_cursors() {
        let mut model = update(&base(), Event::StartOrToggle).model;
        model.players[0].phase = 6;

        let step = update(&model, Event::SetRuleset(2));
        assert_eq!(step.model.players[0].phase, 2, "cursor clamps to the new last phase");
    }

    #[test]
    fn set_ruleset_out_of_range_is_inert() {
        let fresh = base();
        let step = update(&fresh, Event::SetRuleset(99));
        assert_eq!(step.model, fresh);
    }

    #[test]
    fn set_player_count_grows_names_and_never_shrinks_them() {
        let grown = update(&base(), Event::SetPlayerCount(4)).model;
        assert_eq!(grown.options.player_count, 4);
        assert_eq!(grown.options.player_names.len(), 4);
        assert_eq!(grown.options.player_names[3], "Player 4");

        let shrunk = update(&grown, Event::SetPlayerCount(2)).model;
        assert_eq!(shrunk.options.player_count, 2);
        assert_eq!(shrunk.options.player_names.len(), 4, "names are kept for later");
    }

    #[test]
    fn set_player_count_rejects_out_of_range_counts() {
        let fresh = base();
        assert_eq!(update(&fresh, Event::SetPlayerCount(0)).model, fresh);
        assert_eq!(update(&fresh, Event::SetPlayerCount(-1)).model, fresh);

        let over = i64::try_from(MAX_PLAYERS + 1).expect("small constant");
        assert_eq!(update(&fresh, Event::SetPlayerCount(over)).model, fresh);
        assert_eq!(update(&fresh, Event::SetPlayerCount(i64::MAX)).model, fresh);
    }

    #[test]
    fn set_player_count_leaves_seated_players_alone() {
        let started = update(&base(), Event::StartOrToggle).model;

        let after = update(&started, Event::SetPlayerCount(5)).model;
        assert_eq!(after.players.len(), 2, "seated players resize only on reinitialization");
        assert_eq!(after.options.player_count, 5);
    }

    #[test]
    fn set_player_name_trims_and_replaces() {
        let step = update(&base(), Event::SetPlayerName {
            index: 1,
            name: "  Morgan  ".to_owned(),
        });
        assert_eq!(step.model.options.player_names[1], "Morgan");
    }

    #[test]
    fn set_player_name_out_of_bounds_is_inert() {
        let fresh = base();
        let step = update(&fresh, Event::SetPlayerName { index: 9, name: "X".to_owned() });
        assert_eq!(step.model, fresh);
    }

    #[test]
    fn set_palette_resolves_and_remembers_the_name() {
        let step = update(&base(), Event::SetPalette("nord".to_owned()));
        assert_eq!(step.model.palette.name, "nord");
        assert_eq!(step.model.options.palette_name, "nord");

        let fallback = update(&step.model, Event::SetPalette("no-such".to_owned()));
        assert_eq!(fallback.model.palette, Palette::default());
        assert_eq!(fallback.model.options.palette_name, "no-such");
    }

    #[test]
    fn set_time_format_is_stored_verbatim() {
        let step = update(&base(), Event::SetTimeFormat("sundial".to_owned()));
        assert_eq!(step.model.options.time_format, "sundial");
    }

    #[test]
    fn set_one_turn_flips_only_the_selected_entry() {
        let step = update(&base(), Event::SetOneTurn(true));

        assert!(step.model.options.rules[0].one_turn);
        assert!(!step.model.options.rules[1].one_turn);
        assert!(!step.model.uses_phases(), "phases stop applying once one-turn is set");
    }

    #[test]
    fn set_logging_updates_the_flag() {
        let step = update(&base(), Event::SetLogging(true));
        assert!(step.model.options.logging);
    }

    #[test]
    fn update_never_mutates_its_input() {
        let model = run(base(), &[Event::StartOrToggle, Event::Tick]);
        let snapshot = model.clone();

        let _ = update(&model, Event::SwitchTurns);
        let _ = update(&model, Event::EndGame);
        let _ = update(&model, Event::SetPlayerCount(7));

        assert_eq!(model, snapshot);
    }
}

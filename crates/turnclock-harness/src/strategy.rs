//! Proptest strategies over events and starting models.
//!
//! Event generation is deliberately messy: indices and counts run past
//! their valid ranges and keys include unbound ones, so generated sequences
//! exercise the tolerant no-op paths as hard as the happy paths.

use proptest::prelude::*;
use turnclock_app::{ConfirmKind, Event, KeyInput, Model};
use turnclock_core::{Options, TIME_FORMAT_24H, TIME_FORMAT_AMPM};

/// Strategy over starting models: one to six players, any catalog ruleset.
pub fn model_strategy() -> impl Strategy<Value = Model> {
    (1_usize..=6, 0_usize..8).prop_map(|(count, ruleset)| {
        let mut options = Options::default();
        options.player_count = count;
        options.default_ruleset = ruleset;
        Model::new(options)
    })
}

/// Strategy over keyboard input, biased toward bound keys.
pub fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        5 => proptest::sample::select(vec![
            's', 'S', ' ', 'p', 'P', 'b', 'B', 'o', 'O', 'a', 'A', 'e', 'E',
        ])
        .prop_map(KeyInput::Char),
        3 => any::<char>().prop_map(KeyInput::Char),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Up),
        1 => Just(KeyInput::Down),
    ]
}

/// Strategy over every reducer event, weighted toward game flow.
pub fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => flow_event_strategy(),
        1 => options_event_strategy(),
    ]
}

/// Game-flow events: the clock, turns, phases, prompts, screens.
fn flow_event_strategy() -> impl Strategy<Value = Event> {
    let confirm = (prop_oneof![Just(ConfirmKind::EndGame), Just(ConfirmKind::Quit)], any::<bool>())
        .prop_map(|(kind, accepted)| Event::Confirm { kind, accepted });
    let screen =
        prop_oneof![Just(Event::ShowOptions), Just(Event::ShowAbout), Just(Event::ShowMain)];

    prop_oneof![
        8 => Just(Event::Tick),
        6 => Just(Event::SwitchTurns),
        5 => Just(Event::StartOrToggle),
        4 => Just(Event::NextPhase),
        3 => Just(Event::PrevPhase),
        3 => key_strategy().prop_map(Event::Key),
        2 => Just(Event::RequestEndGame),
        2 => confirm,
        2 => screen,
        1 => Just(Event::EndGame),
    ]
}

/// Options edits, including out-of-range and unknown values.
fn options_event_strategy() -> impl Strategy<Value = Event> {
    let rename =
        (0_usize..6, "[A-Za-z ]{0,12}").prop_map(|(index, name)| Event::SetPlayerName {
            index,
            name,
        });

    prop_oneof![
        2 => (0_usize..10).prop_map(Event::SetRuleset),
        2 => (-2_i64..40).prop_map(Event::SetPlayerCount),
        2 => rename,
        1 => proptest::sample::select(vec!["default", "solarized", "nord", "gruvbox", "plasma"])
            .prop_map(|name| Event::SetPalette(name.to_owned())),
        1 => proptest::sample::select(vec![TIME_FORMAT_AMPM, TIME_FORMAT_24H, "sundial"])
            .prop_map(|format| Event::SetTimeFormat(format.to_owned())),
        1 => any::<bool>().prop_map(Event::SetOneTurn),
        1 => any::<bool>().prop_map(Event::SetLogging),
    ]
}

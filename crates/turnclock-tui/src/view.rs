//! Host-side view state.
//!
//! The reducer owns the game; this module owns what the terminal shell
//! layers on top of it: the confirmation overlay, the options cursor, and
//! the in-place name editor. Every key passes through here first, and only
//! keys the view declines reach the reducer's key map.

use turnclock_app::{ConfirmKind, Event, KeyInput, Model, Screen};
use turnclock_core::{MAX_PLAYERS, Palette, TIME_FORMAT_24H, TIME_FORMAT_AMPM};

/// A yes/no prompt layered over the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmOverlay {
    /// Which destructive action the prompt guards.
    pub kind: ConfirmKind,
    /// Whether the "yes" button is highlighted. Starts on "no".
    pub yes_selected: bool,
}

/// In-progress edit of one player name.
///
/// The cursor counts characters, not bytes, so names with accented letters
/// edit the same way plain ones do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEditor {
    index: usize,
    buffer: String,
    cursor: usize,
}

impl NameEditor {
    fn new(index: usize, current: &str) -> Self {
        Self { index, buffer: current.to_owned(), cursor: current.chars().count() }
    }

    /// Index of the name row being edited.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current text in the edit buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position within the buffer, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Byte offset of character `index`, clamped to the buffer end.
    fn byte_at(&self, index: usize) -> usize {
        self.buffer.char_indices().nth(index).map_or(self.buffer.len(), |(at, _)| at)
    }

    /// Apply one editing key. Keys without an editing meaning are ignored.
    fn edit(&mut self, key: KeyInput) {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_at(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_at(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                let at = self.byte_at(self.cursor);
                if at < self.buffer.len() {
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => {
                if self.cursor < self.buffer.chars().count() {
                    self.cursor += 1;
                }
            },
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.buffer.chars().count(),
            _ => {},
        }
    }
}

/// What the host should do with a key the view layer inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyRoute {
    /// The view consumed the key.
    Consumed,
    /// The view turned the key into an event for the queue.
    Send(Event),
    /// The user confirmed the quit prompt.
    Quit,
    /// Not a view concern; the reducer's key map decides.
    ToReducer,
}

/// One row of the options editor, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsRow {
    /// Active ruleset selector.
    Ruleset,
    /// Configured player count.
    PlayerCount,
    /// Editable name of the player at this index.
    PlayerName(usize),
    /// Color palette selector.
    Palette,
    /// Wall-clock format selector.
    TimeFormat,
    /// One-turn flag of the selected ruleset.
    OneTurn,
    /// CSV logbook toggle.
    Logging,
}

/// The options editor rows for the current model, in display order.
///
/// Name rows grow and shrink with the configured player count, so the list
/// is recomputed from the model rather than stored.
pub fn options_rows(model: &Model) -> Vec<OptionsRow> {
    let mut rows = vec![OptionsRow::Ruleset, OptionsRow::PlayerCount];
    rows.extend((0..model.options.player_count).map(OptionsRow::PlayerName));
    rows.extend([
        OptionsRow::Palette,
        OptionsRow::TimeFormat,
        OptionsRow::OneTurn,
        OptionsRow::Logging,
    ]);
    rows
}

/// View state owned by the terminal shell.
///
/// Reads the model for routing decisions but never writes to it.
#[derive(Debug, Default)]
pub struct ViewState {
    overlay: Option<ConfirmOverlay>,
    cursor: usize,
    editor: Option<NameEditor>,
}

impl ViewState {
    /// A view with no overlay and the options cursor on the first row.
    pub fn new() -> Self {
        Self::default()
    }

    /// The open confirmation prompt, if any.
    pub fn overlay(&self) -> Option<&ConfirmOverlay> {
        self.overlay.as_ref()
    }

    /// The active name editor, if any.
    pub fn editor(&self) -> Option<&NameEditor> {
        self.editor.as_ref()
    }

    /// The options row the cursor sits on.
    pub fn selected_row(&self, model: &Model) -> Option<OptionsRow> {
        let rows = options_rows(model);
        rows.get(self.cursor.min(rows.len().saturating_sub(1))).copied()
    }

    /// Open a confirmation prompt. Replaces any prompt already showing.
    pub fn open_confirm(&mut self, kind: ConfirmKind) {
        self.overlay = Some(ConfirmOverlay { kind, yes_selected: false });
    }

    /// Drop the confirmation prompt, if one is showing.
    pub fn dismiss_overlay(&mut self) {
        self.overlay = None;
    }

    /// Route one key.
    ///
    /// Precedence: an open prompt swallows everything, the Ctrl-C chord
    /// raises quit intent even mid-edit, then the name editor, then the
    /// plain quit keys, then options navigation. Whatever is left goes to
    /// the reducer.
    pub fn handle_key(&mut self, key: KeyInput, model: &Model) -> KeyRoute {
        if self.editor.is_some() && model.screen != Screen::Options {
            // A queued event pulled the screen out from under the edit.
            self.editor = None;
        }

        if self.overlay.is_some() {
            return self.overlay_key(key);
        }
        if matches!(key, KeyInput::Ctrl('c' | 'C')) {
            self.open_confirm(ConfirmKind::Quit);
            return KeyRoute::Consumed;
        }
        if self.editor.is_some() {
            return self.editor_key(key);
        }
        if matches!(key, KeyInput::Char('q' | 'Q') | KeyInput::Esc) {
            self.open_confirm(ConfirmKind::Quit);
            return KeyRoute::Consumed;
        }
        if model.screen == Screen::Options {
            return self.options_key(key, model);
        }
        KeyRoute::ToReducer
    }

    fn overlay_key(&mut self, key: KeyInput) -> KeyRoute {
        let Some(overlay) = self.overlay else {
            return KeyRoute::Consumed;
        };

        match key {
            KeyInput::Left | KeyInput::Right | KeyInput::Tab | KeyInput::Up | KeyInput::Down => {
                self.overlay =
                    Some(ConfirmOverlay { yes_selected: !overlay.yes_selected, ..overlay });
                KeyRoute::Consumed
            },
            KeyInput::Char('y' | 'Y') => self.answer(overlay.kind, true),
            KeyInput::Char('n' | 'N') | KeyInput::Esc => self.answer(overlay.kind, false),
            KeyInput::Enter => self.answer(overlay.kind, overlay.yes_selected),
            _ => KeyRoute::Consumed,
        }
    }

    /// Resolve the open prompt with the user's answer.
    ///
    /// End-game answers re-enter the queue as a `Confirm` event whether
    /// accepted or declined, so one reducer path sees both outcomes. Quit
    /// answers stay host-owned and never reach the reducer.
    fn answer(&mut self, kind: ConfirmKind, accepted: bool) -> KeyRoute {
        self.overlay = None;
        match kind {
            ConfirmKind::Quit if accepted => KeyRoute::Quit,
            ConfirmKind::Quit => KeyRoute::Consumed,
            ConfirmKind::EndGame => KeyRoute::Send(Event::Confirm { kind, accepted }),
        }
    }

    fn editor_key(&mut self, key: KeyInput) -> KeyRoute {
        match key {
            KeyInput::Enter => {
                let Some(editor) = self.editor.take() else {
                    return KeyRoute::Consumed;
                };
                KeyRoute::Send(Event::SetPlayerName { index: editor.index, name: editor.buffer })
            },
            KeyInput::Esc => {
                self.editor = None;
                KeyRoute::Consumed
            },
            key => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.edit(key);
                }
                KeyRoute::Consumed
            },
        }
    }

    fn options_key(&mut self, key: KeyInput, model: &Model) -> KeyRoute {
        let rows = options_rows(model);
        let last = rows.len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
        let Some(row) = rows.get(self.cursor).copied() else {
            return KeyRoute::ToReducer;
        };

        match key {
            KeyInput::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                KeyRoute::Consumed
            },
            KeyInput::Down => {
                self.cursor = (self.cursor + 1).min(last);
                KeyRoute::Consumed
            },
            KeyInput::Left => Self::adjust(row, model, false),
            KeyInput::Right => Self::adjust(row, model, true),
            KeyInput::Enter => self.activate(row, model),
            _ => KeyRoute::ToReducer,
        }
    }

    /// Turn a left/right press on `row` into its settings event.
    ///
    /// Selectors step through their catalogs without wrapping; presses past
    /// either end are consumed silently. Toggles flip regardless of
    /// direction.
    fn adjust(row: OptionsRow, model: &Model, forward: bool) -> KeyRoute {
        match row {
            OptionsRow::Ruleset => {
                let target = if forward {
                    model.options.default_ruleset.checked_add(1)
                } else {
                    model.options.default_ruleset.checked_sub(1)
                };
                match target {
                    Some(index) if index < model.options.rules.len() => {
                        KeyRoute::Send(Event::SetRuleset(index))
                    },
                    _ => KeyRoute::Consumed,
                }
            },
            OptionsRow::PlayerCount => {
                let (Ok(count), Ok(cap)) =
                    (i64::try_from(model.options.player_count), i64::try_from(MAX_PLAYERS))
                else {
                    return KeyRoute::Consumed;
                };
                let target = if forward { count + 1 } else { count - 1 };
                if (1..=cap).contains(&target) {
                    KeyRoute::Send(Event::SetPlayerCount(target))
                } else {
                    KeyRoute::Consumed
                }
            },
            OptionsRow::PlayerName(_) => KeyRoute::Consumed,
            OptionsRow::Palette => {
                let names = Palette::names();
                let current = names
                    .iter()
                    .position(|name| *name == model.options.palette_name)
                    .unwrap_or(0);
                let target =
                    if forward { current.checked_add(1) } else { current.checked_sub(1) };
                match target.and_then(|index| names.get(index)) {
                    Some(name) => KeyRoute::Send(Event::SetPalette((*name).to_owned())),
                    None => KeyRoute::Consumed,
                }
            },
            OptionsRow::TimeFormat => {
                let format =
                    if model.options.ampm() { TIME_FORMAT_24H } else { TIME_FORMAT_AMPM };
                KeyRoute::Send(Event::SetTimeFormat(format.to_owned()))
            },
            OptionsRow::OneTurn => {
                let current = model.options.active_ruleset().is_some_and(|r| r.one_turn);
                KeyRoute::Send(Event::SetOneTurn(!current))
            },
            OptionsRow::Logging => KeyRoute::Send(Event::SetLogging(!model.options.logging)),
        }
    }

    /// Turn an enter press on `row` into its action.
    fn activate(&mut self, row: OptionsRow, model: &Model) -> KeyRoute {
        match row {
            OptionsRow::PlayerName(index) => {
                let current = model.options.player_names.get(index).map_or("", String::as_str);
                self.editor = Some(NameEditor::new(index, current));
                KeyRoute::Consumed
            },
            OptionsRow::TimeFormat | OptionsRow::OneTurn | OptionsRow::Logging => {
                Self::adjust(row, model, true)
            },
            OptionsRow::Ruleset | OptionsRow::PlayerCount | OptionsRow::Palette => {
                KeyRoute::Consumed
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use turnclock_core::Options;

    use super::*;

    fn main_model() -> Model {
        Model::new(Options::default())
    }

    fn options_model() -> Model {
        let mut model = main_model();
        model.screen = Screen::Options;
        model
    }

    /// Press Down until the cursor reaches `target`.
    fn move_to(view: &mut ViewState, model: &Model, target: OptionsRow) {
        for _ in 0..options_rows(model).len() {
            if view.selected_row(model) == Some(target) {
                return;
            }
            view.handle_key(KeyInput::Down, model);
        }
        panic!("row {target:?} not reachable");
    }

    #[test]
    fn quit_keys_open_the_quit_prompt() {
        for key in [KeyInput::Char('q'), KeyInput::Char('Q'), KeyInput::Esc, KeyInput::Ctrl('c')] {
            let mut view = ViewState::new();
            assert_eq!(view.handle_key(key, &main_model()), KeyRoute::Consumed);
            assert_eq!(view.overlay().map(|o| o.kind), Some(ConfirmKind::Quit));
        }
    }

    #[test]
    fn game_keys_fall_through_to_the_reducer() {
        let mut view = ViewState::new();
        assert_eq!(view.handle_key(KeyInput::Char('s'), &main_model()), KeyRoute::ToReducer);
        assert_eq!(view.handle_key(KeyInput::Char(' '), &main_model()), KeyRoute::ToReducer);
    }

    #[test]
    fn open_prompt_swallows_game_keys() {
        let mut view = ViewState::new();
        let model = main_model();
        view.handle_key(KeyInput::Char('q'), &model);

        assert_eq!(view.handle_key(KeyInput::Char('s'), &model), KeyRoute::Consumed);
        assert!(view.overlay().is_some(), "prompt should still be showing");
    }

    #[test]
    fn declined_quit_dismisses_the_prompt() {
        let mut view = ViewState::new();
        let model = main_model();
        view.handle_key(KeyInput::Char('q'), &model);

        assert_eq!(view.handle_key(KeyInput::Char('n'), &model), KeyRoute::Consumed);
        assert!(view.overlay().is_none());
    }

    #[test]
    fn accepted_quit_routes_shutdown() {
        let mut view = ViewState::new();
        let model = main_model();
        view.handle_key(KeyInput::Esc, &model);

        assert_eq!(view.handle_key(KeyInput::Char('y'), &model), KeyRoute::Quit);
    }

    #[test]
    fn enter_answers_with_the_highlighted_button() {
        let mut view = ViewState::new();
        let model = main_model();
        view.handle_key(KeyInput::Char('q'), &model);

        // The prompt starts on "no"; Enter declines.
        assert_eq!(view.handle_key(KeyInput::Enter, &model), KeyRoute::Consumed);
        assert!(view.overlay().is_none());

        view.handle_key(KeyInput::Char('q'), &model);
        view.handle_key(KeyInput::Left, &model);
        assert_eq!(view.handle_key(KeyInput::Enter, &model), KeyRoute::Quit);
    }

    #[test]
    fn end_game_answers_reenter_the_queue_either_way() {
        let model = main_model();

        let mut view = ViewState::new();
        view.open_confirm(ConfirmKind::EndGame);
        assert_eq!(
            view.handle_key(KeyInput::Char('y'), &model),
            KeyRoute::Send(Event::Confirm { kind: ConfirmKind::EndGame, accepted: true })
        );

        let mut view = ViewState::new();
        view.open_confirm(ConfirmKind::EndGame);
        assert_eq!(
            view.handle_key(KeyInput::Esc, &model),
            KeyRoute::Send(Event::Confirm { kind: ConfirmKind::EndGame, accepted: false })
        );
    }

    #[test]
    fn options_cursor_moves_and_clamps() {
        let mut view = ViewState::new();
        let model = options_model();
        let rows = options_rows(&model);

        for _ in 0..rows.len() * 2 {
            view.handle_key(KeyInput::Down, &model);
        }
        assert_eq!(view.selected_row(&model), Some(OptionsRow::Logging));

        for _ in 0..rows.len() * 2 {
            view.handle_key(KeyInput::Up, &model);
        }
        assert_eq!(view.selected_row(&model), Some(OptionsRow::Ruleset));
    }

    #[test]
    fn ruleset_selector_steps_without_wrapping() {
        let mut view = ViewState::new();
        let model = options_model();

        assert_eq!(
            view.handle_key(KeyInput::Right, &model),
            KeyRoute::Send(Event::SetRuleset(1))
        );
        assert_eq!(view.handle_key(KeyInput::Left, &model), KeyRoute::Consumed);
    }

    #[test]
    fn player_count_stays_between_one_and_the_cap() {
        let mut view = ViewState::new();
        let model = options_model();
        move_to(&mut view, &model, OptionsRow::PlayerCount);

        assert_eq!(
            view.handle_key(KeyInput::Left, &model),
            KeyRoute::Send(Event::SetPlayerCount(1))
        );

        let mut solo = model.clone();
        solo.options.player_count = 1;
        let mut view = ViewState::new();
        move_to(&mut view, &solo, OptionsRow::PlayerCount);
        assert_eq!(view.handle_key(KeyInput::Left, &solo), KeyRoute::Consumed);

        let mut full = model.clone();
        full.options.player_count = MAX_PLAYERS;
        let mut view = ViewState::new();
        move_to(&mut view, &full, OptionsRow::PlayerCount);
        assert_eq!(view.handle_key(KeyInput::Right, &full), KeyRoute::Consumed);
    }

    #[test]
    fn name_editor_commits_on_enter() {
        let mut view = ViewState::new();
        let model = options_model();
        move_to(&mut view, &model, OptionsRow::PlayerName(0));

        view.handle_key(KeyInput::Enter, &model);
        assert_eq!(view.editor().map(NameEditor::buffer), Some("Player 1"));

        for _ in 0.."Player 1".len() {
            view.handle_key(KeyInput::Backspace, &model);
        }
        for c in "Anna".chars() {
            view.handle_key(KeyInput::Char(c), &model);
        }
        assert_eq!(
            view.handle_key(KeyInput::Enter, &model),
            KeyRoute::Send(Event::SetPlayerName { index: 0, name: "Anna".to_owned() })
        );
        assert!(view.editor().is_none());
    }

    #[test]
    fn name_editor_cancels_on_esc() {
        let mut view = ViewState::new();
        let model = options_model();
        move_to(&mut view, &model, OptionsRow::PlayerName(1));
        view.handle_key(KeyInput::Enter, &model);
        view.handle_key(KeyInput::Char('x'), &model);

        assert_eq!(view.handle_key(KeyInput::Esc, &model), KeyRoute::Consumed);
        assert!(view.editor().is_none());
        assert!(view.overlay().is_none(), "esc mid-edit cancels, it does not quit");
    }

    #[test]
    fn name_editor_handles_multibyte_names() {
        let mut editor = NameEditor::new(0, "Zoë");
        editor.edit(KeyInput::Backspace);
        assert_eq!(editor.buffer(), "Zo");

        editor.edit(KeyInput::Home);
        editor.edit(KeyInput::Char('É'));
        assert_eq!(editor.buffer(), "ÉZo");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn ctrl_c_raises_quit_even_while_editing() {
        let mut view = ViewState::new();
        let model = options_model();
        move_to(&mut view, &model, OptionsRow::PlayerName(0));
        view.handle_key(KeyInput::Enter, &model);

        assert_eq!(view.handle_key(KeyInput::Ctrl('c'), &model), KeyRoute::Consumed);
        assert_eq!(view.overlay().map(|o| o.kind), Some(ConfirmKind::Quit));
    }

    #[test]
    fn stale_editor_is_dropped_when_the_screen_changes() {
        let mut view = ViewState::new();
        let options = options_model();
        move_to(&mut view, &options, OptionsRow::PlayerName(0));
        view.handle_key(KeyInput::Enter, &options);
        assert!(view.editor().is_some());

        // A queued switch-turns event forced the main screen meanwhile.
        assert_eq!(view.handle_key(KeyInput::Char('s'), &main_model()), KeyRoute::ToReducer);
        assert!(view.editor().is_none());
    }

    #[test]
    fn toggle_rows_flip_their_setting() {
        let model = options_model();

        let mut view = ViewState::new();
        move_to(&mut view, &model, OptionsRow::Logging);
        assert_eq!(
            view.handle_key(KeyInput::Enter, &model),
            KeyRoute::Send(Event::SetLogging(true))
        );

        let mut view = ViewState::new();
        move_to(&mut view, &model, OptionsRow::TimeFormat);
        assert_eq!(
            view.handle_key(KeyInput::Right, &model),
            KeyRoute::Send(Event::SetTimeFormat(TIME_FORMAT_AMPM.to_owned()))
        );

        let mut view = ViewState::new();
        move_to(&mut view, &model, OptionsRow::OneTurn);
        assert_eq!(
            view.handle_key(KeyInput::Enter, &model),
            KeyRoute::Send(Event::SetOneTurn(true))
        );
    }

    #[test]
    fn palette_selector_walks_the_catalog() {
        let mut view = ViewState::new();
        let model = options_model();
        move_to(&mut view, &model, OptionsRow::Palette);

        assert_eq!(
            view.handle_key(KeyInput::Right, &model),
            KeyRoute::Send(Event::SetPalette("solarized".to_owned()))
        );
        assert_eq!(view.handle_key(KeyInput::Left, &model), KeyRoute::Consumed);
    }
}

//! Options screen
//!
//! One row per setting. Up and Down move the cursor, Left and Right change
//! the value under it, Enter edits a player name in place. This module only
//! draws what the view state says; every change still travels through the
//! reducer as an event.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use turnclock_app::Model;

use crate::view::{NameEditor, OptionsRow, ViewState, options_rows};

use super::tint;

const LABEL_WIDTH: usize = 14;
const HINT_HEIGHT: u16 = 1;

/// Render the options screen.
pub fn render(frame: &mut Frame, model: &Model, view: &ViewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(HINT_HEIGHT)])
        .split(frame.area());
    let [list_area, hint_area] = chunks.as_ref() else {
        return;
    };

    render_rows(frame, model, view, *list_area);
    render_hint(frame, model, *hint_area);
}

fn render_rows(frame: &mut Frame, model: &Model, view: &ViewState, area: Rect) {
    let palette = &model.palette;
    let selected = view.selected_row(model);

    let items: Vec<ListItem> = options_rows(model)
        .into_iter()
        .map(|row| {
            let is_selected = selected == Some(row);
            let marker = if is_selected { "> " } else { "  " };
            let label_style = if is_selected {
                Style::default().fg(tint(palette.accent)).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(tint(palette.text))
            };

            let (label, value) = describe_row(row, model, view);
            ListItem::new(Line::from(vec![
                Span::styled(marker.to_owned(), Style::default().fg(tint(palette.accent))),
                Span::styled(format!("{label:<width$}", width = LABEL_WIDTH), label_style),
                Span::styled(value, Style::default().fg(tint(palette.text))),
            ]))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tint(palette.idle)))
        .title(" Options ");
    frame.render_widget(List::new(items).block(block), area);
}

/// Label and displayed value for one row.
fn describe_row(row: OptionsRow, model: &Model, view: &ViewState) -> (String, String) {
    let options = &model.options;
    match row {
        OptionsRow::Ruleset => (
            "Ruleset".to_owned(),
            options.active_ruleset().map_or_else(String::new, |ruleset| ruleset.name.clone()),
        ),
        OptionsRow::PlayerCount => ("Players".to_owned(), options.player_count.to_string()),
        OptionsRow::PlayerName(index) => {
            let label = format!("Name {}", index.saturating_add(1));
            let value = match view.editor() {
                Some(editor) if editor.index() == index => editing_value(editor),
                _ => options.player_names.get(index).cloned().unwrap_or_default(),
            };
            (label, value)
        }
        OptionsRow::Palette => ("Palette".to_owned(), options.palette_name.clone()),
        OptionsRow::TimeFormat => ("Clock".to_owned(), options.time_format.clone()),
        OptionsRow::OneTurn => (
            "One turn".to_owned(),
            on_off(options.active_ruleset().is_some_and(|ruleset| ruleset.one_turn)),
        ),
        OptionsRow::Logging => ("Logging".to_owned(), on_off(options.logging)),
    }
}

/// Editor buffer with the cursor shown as an underscore at its position.
fn editing_value(editor: &NameEditor) -> String {
    let mut shown: String = editor.buffer().chars().take(editor.cursor()).collect();
    shown.push('_');
    shown.extend(editor.buffer().chars().skip(editor.cursor()));
    shown
}

fn on_off(value: bool) -> String {
    if value { "on".to_owned() } else { "off".to_owned() }
}

fn render_hint(frame: &mut Frame, model: &Model, area: Rect) {
    let hint = " Up/Down select | Left/Right change | Enter edit name | o back";
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(tint(model.palette.dim)))),
        area,
    );
}

//! UI rendering
//!
//! Rendering functions that convert the model and view state into terminal
//! output using ratatui widgets. Nothing here mutates state or performs
//! I/O beyond drawing into the frame.

mod about;
mod confirm;
mod log;
mod options;
mod players;
mod status;

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Color,
};
use turnclock_app::{Model, Screen};
use turnclock_core::Rgb;

use crate::view::ViewState;

/// Render the entire UI.
///
/// The screen field picks the full-frame view; an open confirmation prompt
/// draws over whichever view is showing.
pub fn render(frame: &mut Frame, model: &Model, view: &ViewState) {
    match model.screen {
        Screen::Main => render_main(frame, model),
        Screen::Options => options::render(frame, model, view),
        Screen::About => about::render(frame, model),
    }

    if let Some(overlay) = view.overlay() {
        confirm::render(frame, model, overlay);
    }
}

/// Render the main screen (player panels, action log, status bar).
fn render_main(frame: &mut Frame, model: &Model) {
    const PANEL_MIN_HEIGHT: u16 = 7;
    const LOG_HEIGHT: u16 = 8;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(PANEL_MIN_HEIGHT),
            Constraint::Length(LOG_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [players_area, log_area, status_area] = chunks.as_ref() else {
        return;
    };

    players::render(frame, model, *players_area);
    log::render(frame, model, *log_area);
    status::render(frame, model, *status_area);
}

/// Map a palette color onto the terminal.
fn tint(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Format a duration as `HH:MM:SS`.
fn clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}

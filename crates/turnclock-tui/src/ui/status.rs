//! Status bar
//!
//! A single line under the log: session status, total play time, the active
//! ruleset, and the wall clock in the configured format.

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use turnclock_app::{GameStatus, Model};
use turnclock_core::Options;

use super::{clock, tint};

const WALL_CLOCK_WIDTH: u16 = 13;

/// Render the status bar.
pub fn render(frame: &mut Frame, model: &Model, area: Rect) {
    let palette = &model.palette;

    let status = match model.status {
        GameStatus::NotStarted => {
            Span::styled("Not started", Style::default().fg(tint(palette.dim)))
        }
        GameStatus::InProgress => Span::styled(
            "In progress",
            Style::default().fg(tint(palette.accent)).add_modifier(Modifier::BOLD),
        ),
        GameStatus::Paused => Span::styled(
            "Paused",
            Style::default().fg(tint(palette.warning)).add_modifier(Modifier::BOLD),
        ),
    };

    let ruleset = model
        .options
        .active_ruleset()
        .map_or_else(String::new, |ruleset| format!(" | {}", ruleset.name));

    let left = Line::from(vec![
        Span::raw(" "),
        status,
        Span::styled(
            format!(" | Total {}{ruleset}", clock(model.total_time)),
            Style::default().fg(tint(palette.dim)),
        ),
    ]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(WALL_CLOCK_WIDTH)])
        .split(area);
    let [left_area, right_area] = chunks.as_ref() else {
        return;
    };

    frame.render_widget(Paragraph::new(left), *left_area);

    let wall = Span::styled(
        wall_clock(&model.options, Local::now()),
        Style::default().fg(tint(palette.dim)),
    );
    frame.render_widget(Paragraph::new(Line::from(wall)).alignment(Alignment::Right), *right_area);
}

/// Wall-clock text in the configured format.
///
/// Anything other than the exact AM/PM marker renders 24-hour.
fn wall_clock(options: &Options, now: DateTime<Local>) -> String {
    if options.ampm() {
        now.format("%I:%M:%S %p").to_string()
    } else {
        now.format("%H:%M:%S").to_string()
    }
}

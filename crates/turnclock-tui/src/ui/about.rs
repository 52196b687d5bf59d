//! About screen
//!
//! Version line and the key bindings.

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use turnclock_app::Model;

use super::tint;

const BINDINGS: [(&str, &str); 7] = [
    ("s", "start the game, or pause and resume"),
    ("space", "end the turn, pass the clock"),
    ("p / b", "next / previous phase"),
    ("e", "end the game (asks first)"),
    ("o", "options"),
    ("a", "this screen"),
    ("q / Esc", "quit (asks first)"),
];

/// Render the about screen.
pub fn render(frame: &mut Frame, model: &Model) {
    let palette = &model.palette;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  turnclock {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(tint(palette.text)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Turn timer and phase tracker for tabletop games",
            Style::default().fg(tint(palette.dim)),
        )),
        Line::from(""),
    ];
    lines.extend(BINDINGS.iter().map(|(key, what)| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), Style::default().fg(tint(palette.accent))),
            Span::styled(*what, Style::default().fg(tint(palette.text))),
        ])
    }));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tint(palette.idle)))
        .title(" About ");
    frame.render_widget(Paragraph::new(lines).block(block), frame.area());
}

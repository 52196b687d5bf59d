//! Player panels
//!
//! One bordered panel per seat showing the clock, the turn counter, and the
//! current phase. The turn holder's panel is framed in the active color so
//! it reads from across the table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use turnclock_app::{Model, Player};

use super::{clock, tint};

/// Render one panel per player across the area.
pub fn render(frame: &mut Frame, model: &Model, area: Rect) {
    let Ok(count) = u32::try_from(model.players.len()) else {
        return;
    };
    if count == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); model.players.len()])
        .split(area);

    for (player, cell) in model.players.iter().zip(chunks.iter()) {
        render_panel(frame, model, player, *cell);
    }
}

fn render_panel(frame: &mut Frame, model: &Model, player: &Player, area: Rect) {
    let palette = &model.palette;

    let (border, title_style) = if player.is_turn {
        (
            tint(palette.active),
            Style::default().fg(tint(palette.active)).add_modifier(Modifier::BOLD),
        )
    } else {
        (tint(palette.idle), Style::default().fg(tint(palette.dim)))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {} ", player.name), title_style));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            clock(player.elapsed),
            Style::default().fg(tint(palette.text)).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Turn {}", player.turns),
            Style::default().fg(tint(palette.dim)),
        )),
    ];

    if model.uses_phases() {
        let phase = model.phase_name(player.phase).unwrap_or("-");
        let style = if player.is_turn {
            Style::default().fg(tint(palette.accent))
        } else {
            Style::default().fg(tint(palette.dim))
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("Phase: {phase}"), style)));
    }

    frame.render_widget(Paragraph::new(lines).block(block).alignment(Alignment::Center), area);
}

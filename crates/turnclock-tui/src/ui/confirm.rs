//! Confirmation overlay
//!
//! A small centered modal drawn over the current screen. The prompt owns
//! the keyboard until it is answered.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use turnclock_app::{ConfirmKind, Model};

use crate::view::ConfirmOverlay;

use super::tint;

const PROMPT_WIDTH: u16 = 44;
const PROMPT_HEIGHT: u16 = 5;

/// Render the confirmation prompt over whatever is showing.
pub fn render(frame: &mut Frame, model: &Model, overlay: &ConfirmOverlay) {
    let palette = &model.palette;
    let area = center_rect(frame.area(), PROMPT_WIDTH, PROMPT_HEIGHT);

    let question = match overlay.kind {
        ConfirmKind::EndGame => "End the game and reset all clocks?",
        ConfirmKind::Quit => "Quit turnclock?",
    };

    let plain = Style::default().fg(tint(palette.text));
    let highlighted = Style::default()
        .fg(tint(palette.warning))
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let (yes_style, no_style) =
        if overlay.yes_selected { (highlighted, plain) } else { (plain, highlighted) };

    let lines = vec![
        Line::from(Span::styled(question, plain)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Yes ]", yes_style),
            Span::raw("   "),
            Span::styled("[ No ]", no_style),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tint(palette.warning)))
        .title(" Confirm ");

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block).alignment(Alignment::Center), area);
}

/// Center a `width` by `height` rectangle inside `area`.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let margin_x = area.width.saturating_sub(width) / 2;
    let margin_y = area.height.saturating_sub(height) / 2;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(margin_x),
            Constraint::Length(width),
            Constraint::Length(margin_x),
        ])
        .split(area);
    let Some(middle) = columns.get(1).copied() else {
        return area;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(margin_y),
            Constraint::Length(height),
            Constraint::Length(margin_y),
        ])
        .split(middle);
    rows.get(1).copied().unwrap_or(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_rect_is_centered_and_sized() {
        let screen = Rect::new(0, 0, 80, 24);
        let modal = center_rect(screen, 44, 5);

        assert_eq!(modal.width, 44);
        assert_eq!(modal.height, 5);
        assert_eq!(modal.x, 18);
        assert_eq!(modal.y, 9);
    }

    #[test]
    fn center_rect_never_exceeds_a_tiny_screen() {
        let screen = Rect::new(0, 0, 10, 3);
        let modal = center_rect(screen, 44, 5);

        assert!(modal.width <= screen.width);
        assert!(modal.height <= screen.height);
    }
}

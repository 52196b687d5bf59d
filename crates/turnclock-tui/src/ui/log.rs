//! Action log
//!
//! Recent history for the player whose clock is running. The list is pinned
//! to the bottom so the newest entry is always visible.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use turnclock_app::Model;

use super::tint;

const BORDER_SIZE: u16 = 2;

/// Render the turn holder's log.
pub fn render(frame: &mut Frame, model: &Model, area: Rect) {
    let palette = &model.palette;

    let (title, items) = model.active_player().map_or_else(
        || {
            let empty = ListItem::new(Line::from(Span::styled(
                "No one holds the turn",
                Style::default().fg(tint(palette.dim)),
            )));
            (" Log ".to_owned(), vec![empty])
        },
        |player| {
            let items = player
                .log
                .iter()
                .map(|entry| {
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("T{:<3}", entry.turn),
                            Style::default().fg(tint(palette.dim)),
                        ),
                        Span::raw(" "),
                        Span::styled(
                            entry.message.clone(),
                            Style::default().fg(tint(palette.text)),
                        ),
                    ]))
                })
                .collect();
            (format!(" Log: {} ", player.name), items)
        },
    );

    let visible = usize::from(area.height.saturating_sub(BORDER_SIZE));
    let skip = items.len().saturating_sub(visible);
    let items: Vec<ListItem> = items.into_iter().skip(skip).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tint(palette.idle)))
        .title(title);
    frame.render_widget(List::new(items).block(block), area);
}

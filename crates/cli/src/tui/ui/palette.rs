//! Snippet palette rendering (the formatting menu).

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::tui::actions::PALETTE;
use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = Vec::new();

    items.push(ListItem::new(Line::from(vec![Span::styled(
        " SNIPPETS",
        Style::default().fg(Color::Cyan).bold(),
    )])));

    for (i, (name, _)) in PALETTE.iter().enumerate() {
        let style = if i == app.palette_selected {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        } else {
            Style::default()
        };

        let prefix = if i == app.palette_selected { " > " } else { "   " };
        items.push(ListItem::new(format!("{}{}", prefix, name)).style(style));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    // Selection styling is handled manually, no ListState needed
    frame.render_widget(list, area);
}

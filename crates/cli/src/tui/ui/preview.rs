//! Preview pane rendering.
//!
//! Shows the preview pipeline's HTML output as text, the exact content a
//! graphical shell would hand to its web view.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::app::App;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let paragraph = Paragraph::new(app.preview_html.clone())
        .block(
            Block::default()
                .title("Preview (HTML)")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

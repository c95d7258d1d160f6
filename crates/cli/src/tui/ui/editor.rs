//! Editor pane rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let selection = app.buffer.selection();
    let (cursor_line, cursor_col) = app.buffer.line_col();

    // Keep the cursor line visible; scroll is derived, not stored.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1).max(1));

    let mut lines: Vec<Line> = Vec::new();
    let mut offset = 0usize; // char offset of the current line start
    for raw in app.buffer.text().split('\n') {
        let len = raw.chars().count();
        lines.push(render_line(raw, offset, len, selection));
        offset += len + 1;
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title("Editor")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);

    if app.mode == Mode::Edit {
        let x = (area.x + 1)
            .saturating_add(u16::try_from(cursor_col).unwrap_or(u16::MAX))
            .min(area.right().saturating_sub(2));
        let y = (area.y + 1)
            .saturating_add(u16::try_from(cursor_line - scroll).unwrap_or(u16::MAX))
            .min(area.bottom().saturating_sub(2));
        frame.set_cursor_position((x, y));
    }
}

/// Render one line, splitting it into styled spans where the selection
/// overlaps. `offset`/`len` are char positions within the whole buffer.
fn render_line(
    raw: &str,
    offset: usize,
    len: usize,
    selection: Option<(usize, usize)>,
) -> Line<'static> {
    let Some((sel_start, sel_end)) = selection else {
        return Line::from(raw.to_string());
    };

    let line_end = offset + len;
    let start = sel_start.clamp(offset, line_end) - offset;
    let end = sel_end.clamp(offset, line_end) - offset;
    if start >= end {
        return Line::from(raw.to_string());
    }

    let before: String = raw.chars().take(start).collect();
    let selected: String = raw.chars().skip(start).take(end - start).collect();
    let after: String = raw.chars().skip(end).collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(selected, Style::default().bg(Color::DarkGray).fg(Color::White)),
        Span::raw(after),
    ])
}

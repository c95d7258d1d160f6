//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Message, Mode};

/// Map a key event to an optional message based on current app mode.
pub fn map_key_event(app: &App, key: KeyEvent) -> Option<Message> {
    // Global bindings (work in any mode)
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    // Mode-specific bindings
    match app.mode {
        Mode::Edit => map_edit_keys(key),
        Mode::Palette => map_palette_keys(key),
    }
}

fn map_edit_keys(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('s') => Some(Message::Save),
            KeyCode::Char('p') => Some(Message::OpenPalette),
            KeyCode::Char('t') => Some(Message::StripSelection),
            KeyCode::Char(' ') => Some(Message::ToggleMark),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c) => Some(Message::Insert(c)),
        KeyCode::Enter => Some(Message::Newline),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Delete => Some(Message::Delete),

        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Up => Some(Message::MoveUp),
        KeyCode::Down => Some(Message::MoveDown),
        KeyCode::Home => Some(Message::MoveHome),
        KeyCode::End => Some(Message::MoveEnd),

        KeyCode::Esc => Some(Message::Cancel),

        _ => None,
    }
}

fn map_palette_keys(key: KeyEvent) -> Option<Message> {
    match key.code {
        // Vim-style navigation
        KeyCode::Char('j') | KeyCode::Down => Some(Message::PaletteNext),
        KeyCode::Char('k') | KeyCode::Up => Some(Message::PalettePrev),

        KeyCode::Enter => Some(Message::PaletteApply),
        KeyCode::Esc | KeyCode::Char('q') => Some(Message::PaletteCancel),

        _ => None,
    }
}

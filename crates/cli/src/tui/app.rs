//! Application state and update logic following The Elm Architecture.

use std::path::PathBuf;

use mdpad_core::config::types::ResolvedConfig;
use mdpad_core::editor::EditorBuffer;
use mdpad_core::preview::render_preview_with;

use super::actions;

/// Current operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing into the buffer.
    Edit,
    /// Choosing a snippet from the palette.
    Palette,
}

/// Feedback message to display in the status bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Messages that drive state updates.
#[derive(Debug, Clone)]
pub enum Message {
    // Editing
    Insert(char),
    Backspace,
    Delete,
    Newline,

    // Cursor movement
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveHome,
    MoveEnd,

    // Selection
    ToggleMark,
    Cancel,

    // Formatting
    StripSelection,

    // Palette
    OpenPalette,
    PaletteNext,
    PalettePrev,
    PaletteApply,
    PaletteCancel,

    // System
    Save,
    Quit,
}

/// Main application state.
pub struct App {
    /// Operating mode.
    pub mode: Mode,

    /// Resolved configuration.
    pub config: ResolvedConfig,

    /// File being edited.
    pub path: PathBuf,

    /// The text buffer.
    pub buffer: EditorBuffer,

    /// Rendered preview HTML for the current buffer.
    pub preview_html: String,

    /// Currently selected palette entry.
    pub palette_selected: usize,

    /// Unsaved changes.
    pub dirty: bool,

    /// Status bar message.
    pub status: Option<StatusMessage>,

    /// Should quit.
    pub should_quit: bool,
}

impl App {
    pub fn new(config: ResolvedConfig, path: PathBuf, content: String) -> Self {
        let mut app = App {
            mode: Mode::Edit,
            config,
            path,
            buffer: EditorBuffer::from_text(content),
            preview_html: String::new(),
            palette_selected: 0,
            dirty: false,
            status: None,
            should_quit: false,
        };
        app.refresh_preview();
        app
    }

    /// Process a message and update state.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Insert(c) => {
                self.buffer.insert_char(c);
                self.after_edit();
            }
            Message::Backspace => {
                self.buffer.backspace();
                self.after_edit();
            }
            Message::Delete => {
                self.buffer.delete_forward();
                self.after_edit();
            }
            Message::Newline => {
                self.buffer.newline();
                self.after_edit();
            }
            Message::MoveLeft => self.buffer.move_left(),
            Message::MoveRight => self.buffer.move_right(),
            Message::MoveUp => self.buffer.move_up(),
            Message::MoveDown => self.buffer.move_down(),
            Message::MoveHome => self.buffer.move_home(),
            Message::MoveEnd => self.buffer.move_end(),
            Message::ToggleMark => {
                if self.buffer.mark().is_some() {
                    self.buffer.clear_mark();
                } else {
                    self.buffer.set_mark();
                }
            }
            Message::Cancel => {
                self.buffer.clear_mark();
                self.status = None;
            }
            Message::StripSelection => {
                self.buffer.strip_selection();
                self.after_edit();
            }
            Message::OpenPalette => {
                self.mode = Mode::Palette;
            }
            Message::PaletteNext => {
                if self.palette_selected + 1 < actions::PALETTE.len() {
                    self.palette_selected += 1;
                }
            }
            Message::PalettePrev => {
                self.palette_selected = self.palette_selected.saturating_sub(1);
            }
            Message::PaletteApply => {
                let (_, action) = actions::PALETTE[self.palette_selected];
                self.mode = Mode::Edit;
                actions::apply(self, action);
            }
            Message::PaletteCancel => {
                self.mode = Mode::Edit;
            }
            Message::Save => self.save(),
            Message::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Bookkeeping after any buffer mutation.
    pub fn after_edit(&mut self) {
        self.dirty = true;
        self.status = None;
        self.refresh_preview();
    }

    pub fn refresh_preview(&mut self) {
        self.preview_html =
            render_preview_with(self.buffer.text(), &self.config.preview);
    }

    fn save(&mut self) {
        match std::fs::write(&self.path, self.buffer.text()) {
            Ok(()) => {
                self.dirty = false;
                self.status = Some(StatusMessage {
                    text: format!("Saved {}", self.path.display()),
                    is_error: false,
                });
            }
            Err(e) => {
                self.status = Some(StatusMessage {
                    text: format!("Save failed: {e}"),
                    is_error: true,
                });
            }
        }
    }

    /// Short file name for the header.
    pub fn file_label(&self) -> String {
        self.path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| n.to_string_lossy().into_owned())
    }
}

//! A char-indexed text buffer with a cursor and a selection mark.
//!
//! This is the "editor event to text mutation" layer: every operation is
//! total (positions clamp instead of failing), so the frontend can feed
//! events straight through. The cursor and mark are character indices, not
//! byte offsets; conversion to byte offsets happens only at the string
//! boundary.

use crate::snippets::types::Snippet;
use crate::snippets::{normal_text, normalize_paragraph_separators};

#[derive(Debug, Clone, Default)]
pub struct EditorBuffer {
    text: String,
    cursor: usize,
    mark: Option<usize>,
}

impl EditorBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into(), cursor: 0, mark: None }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Place the selection anchor at the cursor.
    pub fn set_mark(&mut self) {
        self.mark = Some(self.cursor);
    }

    pub fn clear_mark(&mut self) {
        self.mark = None;
    }

    /// Anchor position, if a mark is set (even when the selection is empty).
    #[must_use]
    pub fn mark(&self) -> Option<usize> {
        self.mark
    }

    /// Ordered selection range in char indices, `None` when empty.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        let mark = self.mark?;
        if mark == self.cursor {
            return None;
        }
        Some((mark.min(self.cursor), mark.max(self.cursor)))
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection().is_some()
    }

    #[must_use]
    pub fn selected_text(&self) -> Option<String> {
        let (start, end) = self.selection()?;
        Some(self.char_range(start, end))
    }

    /// Insert at the cursor, replacing the selection if one is active.
    pub fn insert_str(&mut self, s: &str) {
        match self.selection() {
            Some((start, end)) => self.replace_range(start, end, s),
            None => {
                let at = self.byte_index(self.cursor);
                self.text.insert_str(at, s);
                self.cursor += s.chars().count();
            }
        }
        self.mark = None;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    /// Apply a snippet: insert its text, then step the caret back.
    pub fn apply(&mut self, snippet: &Snippet) {
        self.insert_str(&snippet.text);
        self.cursor = self.cursor.saturating_sub(snippet.cursor_back);
    }

    /// Strip markdown from the selection, or insert the `"Normal text"`
    /// placeholder when nothing is selected.
    pub fn strip_selection(&mut self) {
        let snippet = normal_text(self.selected_text().as_deref());
        self.apply(&snippet);
    }

    /// Delete the selection, or the character before the cursor.
    pub fn backspace(&mut self) {
        match self.selection() {
            Some((start, end)) => self.replace_range(start, end, ""),
            None => {
                if self.cursor > 0 {
                    let start = self.cursor - 1;
                    self.replace_range(start, self.cursor, "");
                }
            }
        }
        self.mark = None;
    }

    /// Delete the selection, or the character at the cursor.
    pub fn delete_forward(&mut self) {
        match self.selection() {
            Some((start, end)) => self.replace_range(start, end, ""),
            None => {
                if self.cursor < self.len_chars() {
                    let end = self.cursor + 1;
                    self.replace_range(self.cursor, end, "");
                }
            }
        }
        self.mark = None;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len_chars());
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.line_col();
        if line == 0 {
            self.cursor = 0;
        } else {
            self.move_to_line_col(line - 1, col);
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.line_col();
        if line + 1 >= self.line_count() {
            self.move_end();
        } else {
            self.move_to_line_col(line + 1, col);
        }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.chars().filter(|&ch| ch == '\n').count() + 1
    }

    pub fn move_home(&mut self) {
        let (line, _) = self.line_col();
        self.move_to_line_col(line, 0);
    }

    pub fn move_end(&mut self) {
        let (line, _) = self.line_col();
        self.move_to_line_col(line, usize::MAX);
    }

    /// Line and column of the cursor (zero-based, in chars).
    #[must_use]
    pub fn line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for (i, ch) in self.text.chars().enumerate() {
            if i == self.cursor {
                break;
            }
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Move to `line`, clamping to the last line; `col` clamps to the line
    /// length.
    pub fn move_to_line_col(&mut self, line: usize, col: usize) {
        let mut starts = vec![0usize];
        for (i, ch) in self.text.chars().enumerate() {
            if ch == '\n' {
                starts.push(i + 1);
            }
        }
        let line = line.min(starts.len() - 1);
        let start = starts[line];
        let line_len = match starts.get(line + 1) {
            Some(next) => next - start - 1,
            None => self.len_chars() - start,
        };
        self.cursor = start + col.min(line_len);
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(byte, _)| byte)
    }

    fn char_range(&self, start: usize, end: usize) -> String {
        self.text[self.byte_index(start)..self.byte_index(end)].to_string()
    }

    fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let byte_start = self.byte_index(start);
        let byte_end = self.byte_index(end);
        self.text.replace_range(byte_start..byte_end, replacement);
        self.cursor = start + replacement.chars().count();
    }

    /// Selection text with GUI paragraph separators normalized, for callers
    /// that feed external clipboard/selection content through transforms.
    #[must_use]
    pub fn normalized_selection(&self) -> Option<String> {
        self.selected_text().map(|s| normalize_paragraph_separators(&s))
    }
}

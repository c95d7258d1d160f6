use thiserror::Error;

/// Text produced by a formatting action, plus where the caret lands.
///
/// `cursor_back` is how many characters the caret steps back from the end of
/// the inserted text. Nonzero for empty delimiter pairs like `****`, so
/// typing continues between the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub text: String,
    pub cursor_back: usize,
}

impl Snippet {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), cursor_back: 0 }
    }

    pub fn with_cursor_back(text: impl Into<String>, cursor_back: usize) -> Self {
        Self { text: text.into(), cursor_back }
    }
}

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("heading level {0} is out of range (1-6)")]
    InvalidHeadingLevel(u8),

    #[error("table needs at least one column and one row (got {columns}x{rows})")]
    EmptyTable { columns: usize, rows: usize },
}

//! Palette actions: map palette entries to core snippet calls.

use mdpad_core::snippets::table::{TableSpec, scaffold};
use mdpad_core::snippets::{self, ImageSpec, Snippet};

use super::app::{App, StatusMessage};

/// A formatting action the palette can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetAction {
    NormalText,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Highlight,
    InlineCode,
    Quote,
    Link,
    Comment,
    Heading(u8),
    Caption,
    CodeBlock,
    Checklist,
    Tasks,
    BulletedList,
    OrderedList,
    Table,
    Image,
}

/// Palette entries in display order (the formatting menu of the editor).
pub const PALETTE: &[(&str, SnippetAction)] = &[
    ("Normal Text", SnippetAction::NormalText),
    ("Bold", SnippetAction::Bold),
    ("Italic", SnippetAction::Italic),
    ("Underline", SnippetAction::Underline),
    ("Strikethrough", SnippetAction::Strikethrough),
    ("Highlight", SnippetAction::Highlight),
    ("Quote", SnippetAction::Quote),
    ("Bulleted List", SnippetAction::BulletedList),
    ("Ordered List", SnippetAction::OrderedList),
    ("Insert Link", SnippetAction::Link),
    ("Add Comment", SnippetAction::Comment),
    ("Heading 1", SnippetAction::Heading(1)),
    ("Heading 2", SnippetAction::Heading(2)),
    ("Heading 3", SnippetAction::Heading(3)),
    ("Heading 4", SnippetAction::Heading(4)),
    ("Heading 5", SnippetAction::Heading(5)),
    ("Caption Header", SnippetAction::Caption),
    ("Code Block", SnippetAction::CodeBlock),
    ("Inline Code", SnippetAction::InlineCode),
    ("Checklist", SnippetAction::Checklist),
    ("Tasks", SnippetAction::Tasks),
    ("Table", SnippetAction::Table),
    ("Image", SnippetAction::Image),
];

/// Apply a snippet action to the buffer, wrapping the selection if one is
/// active.
pub fn apply(app: &mut App, action: SnippetAction) {
    let selection = app.buffer.selected_text();
    let sel = selection.as_deref();

    let snippet = match action {
        SnippetAction::NormalText => snippets::normal_text(sel),
        SnippetAction::Bold => snippets::bold(sel),
        SnippetAction::Italic => snippets::italic(sel),
        SnippetAction::Underline => snippets::underline(sel),
        SnippetAction::Strikethrough => snippets::strikethrough(sel),
        SnippetAction::Highlight => snippets::highlight(sel),
        SnippetAction::InlineCode => snippets::inline_code(sel),
        SnippetAction::Quote => snippets::quote(sel),
        SnippetAction::Link => snippets::link(sel),
        SnippetAction::Comment => snippets::comment(),
        SnippetAction::Heading(level) => match snippets::heading(level, sel) {
            Ok(snippet) => snippet,
            Err(e) => {
                app.status = Some(StatusMessage { text: e.to_string(), is_error: true });
                return;
            }
        },
        SnippetAction::Caption => snippets::caption(),
        SnippetAction::CodeBlock => snippets::code_block(None, sel),
        SnippetAction::Checklist => snippets::checklist(),
        SnippetAction::Tasks => snippets::tasks(),
        SnippetAction::BulletedList => snippets::bulleted_list(),
        SnippetAction::OrderedList => snippets::ordered_list(),
        SnippetAction::Table => {
            let spec =
                TableSpec { columns: 2, rows: 2, format: app.config.table_format };
            match scaffold(&spec) {
                Ok(text) => Snippet::new(text),
                Err(e) => {
                    app.status =
                        Some(StatusMessage { text: e.to_string(), is_error: true });
                    return;
                }
            }
        }
        // No file dialog in a terminal; insert a placeholder to edit.
        SnippetAction::Image => snippets::image(&ImageSpec {
            path: "image.png",
            alt: "alt text",
            width: None,
            height: None,
        }),
    };

    app.buffer.apply(&snippet);
    app.after_edit();
}

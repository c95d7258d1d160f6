//! Formatting insertions.
//!
//! Each function maps an editor formatting action to the text it inserts: a
//! pure function from an optional selection to a [`Snippet`]. With a
//! selection the text is wrapped (or transformed); without one a placeholder
//! or empty delimiter pair is produced, with the caret positioned between
//! the delimiters via [`Snippet::cursor_back`].

pub mod table;
pub mod types;

pub use types::{Snippet, SnippetError};

use crate::strip::{NORMAL_TEXT_PLACEHOLDER, markdown_to_plain};

/// Replace U+2029 paragraph separators with line breaks.
///
/// GUI selection APIs hand selections over with U+2029 in place of line
/// breaks; every selection is normalized before wrapping or stripping.
#[must_use]
pub fn normalize_paragraph_separators(text: &str) -> String {
    text.replace('\u{2029}', "\n")
}

fn wrap(selection: Option<&str>, open: &str, close: &str, empty_cursor_back: usize) -> Snippet {
    match selection {
        Some(sel) => {
            Snippet::new(format!("{open}{}{close}", normalize_paragraph_separators(sel)))
        }
        None => Snippet::with_cursor_back(format!("{open}{close}"), empty_cursor_back),
    }
}

#[must_use]
pub fn bold(selection: Option<&str>) -> Snippet {
    wrap(selection, "**", "**", 2)
}

#[must_use]
pub fn italic(selection: Option<&str>) -> Snippet {
    wrap(selection, "*", "*", 1)
}

#[must_use]
pub fn underline(selection: Option<&str>) -> Snippet {
    wrap(selection, "<u>", "</u>", 4)
}

#[must_use]
pub fn strikethrough(selection: Option<&str>) -> Snippet {
    wrap(selection, "~~", "~~", 2)
}

#[must_use]
pub fn highlight(selection: Option<&str>) -> Snippet {
    match selection {
        Some(sel) => {
            Snippet::new(format!("=={}==", normalize_paragraph_separators(sel)))
        }
        None => Snippet::new("==highlight=="),
    }
}

#[must_use]
pub fn inline_code(selection: Option<&str>) -> Snippet {
    wrap(selection, "`", "`", 1)
}

#[must_use]
pub fn quote(selection: Option<&str>) -> Snippet {
    match selection {
        Some(sel) => Snippet::new(format!("> {}", normalize_paragraph_separators(sel))),
        None => Snippet::new("> "),
    }
}

#[must_use]
pub fn link(selection: Option<&str>) -> Snippet {
    match selection {
        Some(sel) => Snippet::new(format!(
            "[{}](http://example.com)",
            normalize_paragraph_separators(sel)
        )),
        None => Snippet::new("[text](http://example.com)"),
    }
}

#[must_use]
pub fn comment() -> Snippet {
    Snippet::new("<!-- Comment -->\n")
}

/// Heading snippet for `level` 1-6.
///
/// # Errors
/// `InvalidHeadingLevel` when `level` is 0 or above 6.
pub fn heading(level: u8, selection: Option<&str>) -> Result<Snippet, SnippetError> {
    if !(1..=6).contains(&level) {
        return Err(SnippetError::InvalidHeadingLevel(level));
    }
    let hashes = "#".repeat(level as usize);
    Ok(match selection {
        Some(sel) => {
            Snippet::new(format!("{hashes} {}", normalize_paragraph_separators(sel)))
        }
        None => Snippet::new(format!("{hashes} Heading {level}\n")),
    })
}

#[must_use]
pub fn caption() -> Snippet {
    Snippet::new("### Caption Header\n")
}

/// Fenced code block, optionally tagged with a language. Without a selection
/// the caret lands on the blank line inside the fence.
#[must_use]
pub fn code_block(language: Option<&str>, selection: Option<&str>) -> Snippet {
    let lang = language.unwrap_or("");
    match selection {
        Some(sel) => Snippet::new(format!(
            "```{lang}\n{}\n```\n",
            normalize_paragraph_separators(sel)
        )),
        None => Snippet::with_cursor_back(format!("```{lang}\n\n```\n"), 5),
    }
}

#[must_use]
pub fn bulleted_list() -> Snippet {
    Snippet::new("- Item 1\n- Item 2\n")
}

#[must_use]
pub fn ordered_list() -> Snippet {
    Snippet::new("1. Item 1\n2. Item 2\n")
}

#[must_use]
pub fn checklist() -> Snippet {
    Snippet::new("- [ ] Task\n")
}

#[must_use]
pub fn tasks() -> Snippet {
    Snippet::new("- [ ] Task 1\n- [x] Task 2\n")
}

/// The "normal text" action: strip the selection, or insert the literal
/// placeholder when nothing is selected (a distinct insertion mode, not a
/// transform edge case).
#[must_use]
pub fn normal_text(selection: Option<&str>) -> Snippet {
    match selection {
        Some(sel) => Snippet::new(markdown_to_plain(&normalize_paragraph_separators(sel))),
        None => Snippet::new(NORMAL_TEXT_PLACEHOLDER),
    }
}

/// Image insertion parameters.
#[derive(Debug, Clone, Default)]
pub struct ImageSpec<'a> {
    pub path: &'a str,
    pub alt: &'a str,
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
}

/// Markdown image syntax, or a raw `<img>` tag when an explicit size is
/// requested (markdown has no size attributes).
#[must_use]
pub fn image(spec: &ImageSpec<'_>) -> Snippet {
    if spec.width.is_none() && spec.height.is_none() {
        return Snippet::new(format!("![{}]({})", spec.alt, spec.path));
    }

    let mut attrs = String::new();
    if let Some(w) = spec.width {
        attrs.push_str(&format!(" width=\"{w}\""));
    }
    if let Some(h) = spec.height {
        attrs.push_str(&format!(" height=\"{h}\""));
    }
    Snippet::new(format!("<img src=\"{}\" alt=\"{}\"{attrs} />", spec.path, spec.alt))
}

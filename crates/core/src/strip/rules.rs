//! Individual stripping rules, one pure function each.
//!
//! Every rule is best-effort pattern substitution. Nesting is handled to one
//! level by rule ordering (bold before italic, images before links); deeper
//! or overlapping constructs degrade gracefully rather than erroring.

use std::sync::LazyLock;

use regex::Regex;

static FENCED_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

// The regex crate has no backreferences, so the matching-delimiter pairs are
// spelled out as one pattern per delimiter, applied star-form first.
static BOLD_STARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static BOLD_UNDERSCORES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").unwrap());

static ITALIC_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").unwrap());

static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"~~(.*?)~~").unwrap());

static HIGHLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==(.*?)==").unwrap());

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*#{1,6}\s*").unwrap());

static BLOCKQUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*>\s*").unwrap());

static UNORDERED_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").unwrap());

static ORDERED_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

// Accepts the bare `[ ] ` residue as well: the unordered-list rule has
// already eaten the leading `- ` by the time this rule runs.
static CHECKLIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:- )?\[[ xX]\] ").unwrap());

// Image syntax is a superset of link syntax (`!` prefix); unwrap images
// first so the link rule sees only real links.
static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());

static HTML_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static HTML_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static SEPARATOR_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*-{3,}\s*$").unwrap());

static TRAILING_SPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\n").unwrap());

static NEWLINE_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Rule 1: remove fenced ``` code blocks entirely, content included.
#[must_use]
pub fn strip_fenced_code_blocks(text: &str) -> String {
    FENCED_CODE_RE.replace_all(text, "").into_owned()
}

/// Rule 2: unwrap single-backtick code spans, keeping the inner text.
#[must_use]
pub fn unwrap_inline_code(text: &str) -> String {
    INLINE_CODE_RE.replace_all(text, "$1").into_owned()
}

/// Rule 3: unwrap `**…**` / `__…__`. Runs before the italic rule so a
/// remaining single `*` or `_` is unambiguous.
#[must_use]
pub fn unwrap_bold(text: &str) -> String {
    let text = BOLD_STARS_RE.replace_all(text, "$1");
    BOLD_UNDERSCORES_RE.replace_all(&text, "$1").into_owned()
}

/// Rule 4: unwrap `*…*` / `_…_`.
#[must_use]
pub fn unwrap_italic(text: &str) -> String {
    let text = ITALIC_STAR_RE.replace_all(text, "$1");
    ITALIC_UNDERSCORE_RE.replace_all(&text, "$1").into_owned()
}

/// Rule 5: unwrap `~~…~~`.
#[must_use]
pub fn unwrap_strikethrough(text: &str) -> String {
    STRIKETHROUGH_RE.replace_all(text, "$1").into_owned()
}

/// Rule 6: unwrap `==…==`.
#[must_use]
pub fn unwrap_highlight(text: &str) -> String {
    HIGHLIGHT_RE.replace_all(text, "$1").into_owned()
}

/// Rule 7: strip `#`–`######` heading markers at line starts.
#[must_use]
pub fn strip_heading_markers(text: &str) -> String {
    HEADING_RE.replace_all(text, "").into_owned()
}

/// Rule 8: strip `>` blockquote markers at line starts.
#[must_use]
pub fn strip_blockquote_markers(text: &str) -> String {
    BLOCKQUOTE_RE.replace_all(text, "").into_owned()
}

/// Rule 9: strip `-`/`*`/`+` list markers (whitespace required) at line
/// starts.
#[must_use]
pub fn strip_unordered_list_markers(text: &str) -> String {
    UNORDERED_LIST_RE.replace_all(text, "").into_owned()
}

/// Rule 10: strip `1.`-style ordered-list markers at line starts.
#[must_use]
pub fn strip_ordered_list_markers(text: &str) -> String {
    ORDERED_LIST_RE.replace_all(text, "").into_owned()
}

/// Rule 11: strip `- [ ] ` / `- [x] ` / `- [X] ` checklist markers where a
/// line begins with them (with or without the list dash, see the pattern
/// note above).
#[must_use]
pub fn strip_checklist_markers(text: &str) -> String {
    CHECKLIST_RE.replace_all(text, "").into_owned()
}

/// Rule 12a: replace `![alt](url)` with `alt`.
#[must_use]
pub fn unwrap_images(text: &str) -> String {
    IMAGE_RE.replace_all(text, "$1").into_owned()
}

/// Rule 12b: replace `[text](url)` with `text`.
#[must_use]
pub fn unwrap_links(text: &str) -> String {
    LINK_RE.replace_all(text, "$1").into_owned()
}

/// Rule 13: drop `<...>` HTML tags, keeping enclosed text. Also swallows
/// one-line comments, since `<!-- c -->` contains no `>` before its last.
#[must_use]
pub fn strip_html_tags(text: &str) -> String {
    HTML_TAG_RE.replace_all(text, "").into_owned()
}

/// Rule 14: drop `<!-- ... -->` comments, multi-line content included.
#[must_use]
pub fn strip_html_comments(text: &str) -> String {
    HTML_COMMENT_RE.replace_all(text, "").into_owned()
}

/// Rule 15: remove table pipes anywhere.
#[must_use]
pub fn strip_table_pipes(text: &str) -> String {
    text.replace('|', "")
}

/// Rule 16: remove lines consisting only of three-or-more hyphens (table
/// header separators).
#[must_use]
pub fn strip_separator_lines(text: &str) -> String {
    SEPARATOR_LINE_RE.replace_all(text, "").into_owned()
}

/// Rule 17: collapse trailing whitespace before line breaks, collapse
/// newline runs, trim the result.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let text = TRAILING_SPACE_RE.replace_all(text, "\n");
    let text = NEWLINE_RUN_RE.replace_all(&text, "\n");
    text.trim().to_string()
}

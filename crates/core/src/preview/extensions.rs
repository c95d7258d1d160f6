//! Dialect extensions applied over the rendered HTML.

use std::sync::LazyLock;

use regex::Regex;

// The captured span may contain line breaks.
static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)~~(.*?)~~").unwrap());

// First captured character must not be `=` or a line break, so empty and
// pathological spans never match. The `[^=]` tail spans lines by itself.
static HIGHLIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=\n][^=]*?)==").unwrap());

/// `~~X~~` → `<s>X</s>`.
pub(crate) fn apply_strikethrough(html: &str) -> String {
    STRIKETHROUGH_RE.replace_all(html, "<s>$1</s>").into_owned()
}

/// `==X==` → `<mark>X</mark>`.
pub(crate) fn apply_highlight(html: &str) -> String {
    HIGHLIGHT_RE.replace_all(html, "<mark>$1</mark>").into_owned()
}

/// Literal `<img ` → `<img class="resizable" ` rewrite. Not HTML-aware: an
/// `<img ` substring inside an attribute value is rewritten too.
pub(crate) fn mark_images_resizable(html: &str) -> String {
    html.replace("<img ", "<img class=\"resizable\" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strikethrough_spans_lines() {
        assert_eq!(apply_strikethrough("~~a\nb~~"), "<s>a\nb</s>");
    }

    #[test]
    fn test_strikethrough_unmatched_left_alone() {
        assert_eq!(apply_strikethrough("~~open"), "~~open");
    }

    #[test]
    fn test_highlight_basic() {
        assert_eq!(apply_highlight("==x=="), "<mark>x</mark>");
    }

    #[test]
    fn test_highlight_rejects_empty_and_leading_equals() {
        assert_eq!(apply_highlight("===="), "====");
        assert_eq!(apply_highlight("==\nx=="), "==\nx==");
    }

    #[test]
    fn test_highlight_spans_lines_after_first_char() {
        assert_eq!(apply_highlight("==a\nb=="), "<mark>a\nb</mark>");
    }

    #[test]
    fn test_img_rewrite() {
        assert_eq!(
            mark_images_resizable("<p><img src=\"u.png\" alt=\"a\" /></p>"),
            "<p><img class=\"resizable\" src=\"u.png\" alt=\"a\" /></p>"
        );
    }

    #[test]
    fn test_img_rewrite_needs_trailing_space() {
        assert_eq!(mark_images_resizable("<imgx>"), "<imgx>");
    }
}

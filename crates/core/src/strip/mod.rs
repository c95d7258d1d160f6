//! Markdown-aware plain-text stripping.
//!
//! `markdown_to_plain` removes markdown/HTML syntax from a text block while
//! preserving the textual content. It is an ordered pattern-substitution
//! pipeline, not a parser: each rule in [`rules`] is a pure function, and the
//! order is load-bearing (later rules assume earlier ones already removed
//! confounding syntax: bold before italic, images before links). Malformed
//! or unbalanced input never fails; unmatched delimiters stay as literal
//! characters.

pub mod rules;

use tracing::debug;

/// Text inserted by the "normal text" editor action when nothing is
/// selected. This is an insertion convenience, not a transform mode: with an
/// empty selection there is nothing to strip, so the editor inserts this
/// placeholder instead of calling [`markdown_to_plain`].
pub const NORMAL_TEXT_PLACEHOLDER: &str = "Normal text";

/// Strip markdown/HTML syntax from `text`, keeping the human-readable
/// content.
///
/// Applies every rule in [`rules`] in the fixed order documented there,
/// then normalizes whitespace (trailing spaces dropped, blank-line runs
/// collapsed, result trimmed).
#[must_use]
pub fn markdown_to_plain(text: &str) -> String {
    let out = rules::strip_fenced_code_blocks(text);
    let out = rules::unwrap_inline_code(&out);
    let out = rules::unwrap_bold(&out);
    let out = rules::unwrap_italic(&out);
    let out = rules::unwrap_strikethrough(&out);
    let out = rules::unwrap_highlight(&out);
    let out = rules::strip_heading_markers(&out);
    let out = rules::strip_blockquote_markers(&out);
    let out = rules::strip_unordered_list_markers(&out);
    let out = rules::strip_ordered_list_markers(&out);
    let out = rules::strip_checklist_markers(&out);
    let out = rules::unwrap_images(&out);
    let out = rules::unwrap_links(&out);
    let out = rules::strip_html_tags(&out);
    let out = rules::strip_html_comments(&out);
    let out = rules::strip_table_pipes(&out);
    let out = rules::strip_separator_lines(&out);
    let out = rules::normalize_whitespace(&out);

    debug!(input_len = text.len(), output_len = out.len(), "stripped markdown");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_fixed_point() {
        let text = "Just a sentence with no special characters.";
        assert_eq!(markdown_to_plain(text), text);
    }

    #[test]
    fn test_emphasis_unwrapped() {
        assert_eq!(markdown_to_plain("**bold**"), "bold");
        assert_eq!(markdown_to_plain("*italic*"), "italic");
        assert_eq!(markdown_to_plain("__bold__"), "bold");
        assert_eq!(markdown_to_plain("_italic_"), "italic");
        assert_eq!(markdown_to_plain("~~gone~~"), "gone");
        assert_eq!(markdown_to_plain("==lit=="), "lit");
    }

    #[test]
    fn test_bold_before_italic_handles_nesting() {
        // The outer ** pair is consumed first, then the remaining * pair.
        assert_eq!(markdown_to_plain("***x***"), "x");
        assert_eq!(markdown_to_plain("**_both_**"), "both");
    }

    #[test]
    fn test_heading_collapses() {
        assert_eq!(markdown_to_plain("# Heading\n"), "Heading");
        assert_eq!(markdown_to_plain("###### Deep\n"), "Deep");
    }

    #[test]
    fn test_fenced_block_discarded() {
        assert_eq!(markdown_to_plain("```\ncode\n```\n"), "");
        assert_eq!(
            markdown_to_plain("before\n```rust\nlet x = 1;\n```\nafter"),
            "before\nafter"
        );
    }

    #[test]
    fn test_links_and_images() {
        assert_eq!(markdown_to_plain("[text](http://x)"), "text");
        assert_eq!(markdown_to_plain("![alt](http://x)"), "alt");
    }

    #[test]
    fn test_checklist_line() {
        assert_eq!(markdown_to_plain("- [ ] Task\n"), "Task");
        assert_eq!(markdown_to_plain("- [x] Done\n- [ ] Open\n"), "Done\nOpen");
    }

    #[test]
    fn test_quote_and_lists() {
        assert_eq!(markdown_to_plain("> quoted\n"), "quoted");
        assert_eq!(markdown_to_plain("- one\n- two\n"), "one\ntwo");
        assert_eq!(markdown_to_plain("1. one\n2. two\n"), "one\ntwo");
    }

    #[test]
    fn test_table_flattened() {
        let table = "|A|B|\n|---|---|\n|1|2|\n";
        assert_eq!(markdown_to_plain(table), "AB\n12");
    }

    #[test]
    fn test_html_removed() {
        assert_eq!(markdown_to_plain("<u>under</u>"), "under");
        assert_eq!(markdown_to_plain("a <!-- note --> b"), "a  b");
    }

    #[test]
    fn test_unmatched_delimiters_left_alone() {
        assert_eq!(markdown_to_plain("a * b"), "a * b");
        assert_eq!(markdown_to_plain("lonely ~~ tilde"), "lonely ~~ tilde");
    }

    #[test]
    fn test_blank_lines_collapse() {
        assert_eq!(markdown_to_plain("a\n\n\nb"), "a\nb");
        assert_eq!(markdown_to_plain("  padded  \n"), "padded");
    }

    #[test]
    fn test_idempotent_once_clean() {
        let inputs = [
            "# Title\n\n**bold** and *italic*\n\n- item\n",
            "> quote with [link](http://example.com)\n",
        ];
        for input in inputs {
            let once = markdown_to_plain(input);
            assert_eq!(markdown_to_plain(&once), once);
        }
    }
}

//! Live preview rendering.
//!
//! `render_preview` produces the HTML the editor's preview pane displays:
//! comrak converts the markdown, then two dialect extensions the base
//! renderer does not provide (`~~strikethrough~~`, `==highlight==`) are
//! applied as substitutions over the *rendered HTML*, a fixed style block is
//! prepended, and every `<img` tag is marked resizable.
//!
//! The substitutions run over the rendered output rather than the source,
//! so they also match marker sequences the renderer emitted literally (even
//! inside tag attributes). Callers relying on the exact output shape depend
//! on this ordering; do not move the substitutions ahead of the renderer.

mod extensions;
mod renderer;

use tracing::debug;

/// Colors for the injected `<mark>` styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewStyle {
    pub mark_background: String,
    pub mark_foreground: String,
}

impl Default for PreviewStyle {
    fn default() -> Self {
        Self { mark_background: "yellow".to_string(), mark_foreground: "black".to_string() }
    }
}

/// Render preview HTML with the default style.
#[must_use]
pub fn render_preview(markdown: &str) -> String {
    render_preview_with(markdown, &PreviewStyle::default())
}

/// Render preview HTML for `markdown`. Total over any input string.
#[must_use]
pub fn render_preview_with(markdown: &str, style: &PreviewStyle) -> String {
    let html = renderer::to_html(markdown);
    let html = extensions::apply_strikethrough(&html);
    let html = extensions::apply_highlight(&html);
    let html = format!("{}{html}", style_block(style));
    let html = extensions::mark_images_resizable(&html);

    debug!(markdown_len = markdown.len(), html_len = html.len(), "rendered preview");
    html
}

fn style_block(style: &PreviewStyle) -> String {
    format!(
        "<style>\nmark {{ background-color: {}; color: {}; }}\nimg.resizable {{\n  resize: both;\n  overflow: auto;\n  max-width: 100%;\n  max-height: 100%;\n  min-width: 20px;\n  min-height: 20px;\n  display: inline-block;\n}}\n</style>",
        style.mark_background, style.mark_foreground
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strikethrough_extension() {
        let html = render_preview("~~x~~");
        assert!(html.contains("<s>x</s>"), "missing <s>: {html}");
    }

    #[test]
    fn test_highlight_extension() {
        let html = render_preview("==x==");
        assert!(html.contains("<mark>x</mark>"), "missing <mark>: {html}");
    }

    #[test]
    fn test_style_block_is_prefix() {
        for input in ["", "plain", "# heading"] {
            let html = render_preview(input);
            assert!(html.starts_with("<style>\nmark { background-color: yellow; color: black; }"));
        }
    }

    #[test]
    fn test_images_marked_resizable() {
        let html = render_preview("![a](u.png)");
        assert!(html.contains("<img class=\"resizable\" "), "missing class: {html}");
        assert!(html.contains("src=\"u.png\""));
    }

    #[test]
    fn test_custom_mark_colors() {
        let style = PreviewStyle {
            mark_background: "orange".to_string(),
            mark_foreground: "white".to_string(),
        };
        let html = render_preview_with("==x==", &style);
        assert!(html.contains("background-color: orange; color: white;"));
    }

    #[test]
    fn test_basic_markdown_still_renders() {
        let html = render_preview("# Title\n\n**bold**");
        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_highlight_requires_content() {
        // `====` must not become an empty <mark>.
        let html = render_preview("====");
        assert!(!html.contains("<mark>"));
    }
}

//! The external markdown-to-HTML collaborator.

use comrak::{Options, markdown_to_html};

pub(crate) fn to_html(markdown: &str) -> String {
    markdown_to_html(markdown, &render_options())
}

fn render_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Strikethrough stays disabled here: the `~~` dialect (like `==`) is
    // applied by post-processing the rendered HTML.

    options.parse.smart = false; // Don't convert quotes/dashes

    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true; // Allow raw HTML passthrough

    options
}

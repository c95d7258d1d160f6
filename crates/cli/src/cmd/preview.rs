use mdpad_core::config::types::ResolvedConfig;
use mdpad_core::preview::render_preview_with;
use tracing::debug;

use crate::PreviewArgs;
use crate::cmd::{read_input, write_output};

pub fn run(config: &ResolvedConfig, args: &PreviewArgs) {
    let input = read_input(args.file.as_deref());
    let html = render_preview_with(&input, &config.preview);

    debug!(markdown_len = input.len(), html_len = html.len(), "rendered preview HTML");

    write_output(args.output.as_deref(), &html);
}

use mdpad_core::config::types::ResolvedConfig;
use mdpad_core::strip::markdown_to_plain;
use tracing::debug;

use crate::StripArgs;
use crate::cmd::{read_input, write_output};

pub fn run(_config: &ResolvedConfig, args: &StripArgs) {
    let input = read_input(args.file.as_deref());
    let plain = markdown_to_plain(&input);

    debug!(
        input_len = input.len(),
        output_len = plain.len(),
        "stripped markdown to plain text"
    );

    write_output(args.output.as_deref(), &plain);
}

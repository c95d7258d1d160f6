use mdpad_core::config::types::ResolvedConfig;

use crate::EditArgs;

pub fn run(config: &ResolvedConfig, args: &EditArgs) {
    if let Err(e) = crate::tui::run(config, &args.file) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

use std::path::Path;

use mdpad_core::config::loader::{ConfigLoader, default_config_path};

pub fn run(config_path: Option<&Path>) {
    let path = config_path.map_or_else(default_config_path, Path::to_path_buf);

    match ConfigLoader::load(config_path) {
        Ok(rc) => {
            println!("OK   mdp doctor");
            if path.exists() {
                println!("path: {}", path.display());
            } else {
                println!("path: {} (not present, defaults in effect)", path.display());
            }
            println!("preview.highlight_background: {}", rc.preview.mark_background);
            println!("preview.highlight_foreground: {}", rc.preview.mark_foreground);
            println!("table.format: {}", rc.table_format.as_str());
            println!("logging.level: {}", rc.logging.level);
            match rc.logging.file {
                Some(file) => println!("logging.file: {}", file.display()),
                None => println!("logging.file: (stderr only)"),
            }
        }
        Err(e) => {
            println!("FAIL mdp doctor");
            println!("{e}");
            if config_path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

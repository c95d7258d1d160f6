pub mod completions;
pub mod doctor;
pub mod edit;
pub mod preview;
pub mod snippet;
pub mod strip;
pub mod table;

use std::fs;
use std::io::Read;
use std::path::Path;

/// Read the given file, or stdin when no file is given. Exits with a
/// diagnostic on I/O failure.
pub fn read_input(file: Option<&Path>) -> String {
    match file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("failed to read {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                eprintln!("failed to read stdin: {e}");
                std::process::exit(1);
            }
            buf
        }
    }
}

/// Write to the given file, or stdout when no file is given. A trailing
/// newline is added on stdout when the content lacks one.
pub fn write_output(output: Option<&Path>, content: &str) {
    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, content) {
                eprintln!("failed to write {}: {e}", path.display());
                std::process::exit(1);
            }
        }
        None => {
            if content.ends_with('\n') || content.is_empty() {
                print!("{content}");
            } else {
                println!("{content}");
            }
        }
    }
}

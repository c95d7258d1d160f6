use std::fs;
use std::path::PathBuf;

use mdpad_core::config::loader::ConfigLoader;
use mdpad_core::snippets::table::TableFormat;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn load_full_config_ok() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[preview]
highlight_background = "orange"
highlight_foreground = "white"

[table]
format = "simple"

[logging]
level = "debug"
"#;
    write_file(&cfg_path, toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.preview.mark_background, "orange");
    assert_eq!(rc.preview.mark_foreground, "white");
    assert_eq!(rc.table_format, TableFormat::Simple);
    assert_eq!(rc.logging.level, "debug");
    assert!(rc.logging.file.is_none());
}

#[test]
fn missing_file_loads_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("does-not-exist.toml");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("defaults expected");
    assert_eq!(rc.preview.mark_background, "yellow");
    assert_eq!(rc.preview.mark_foreground, "black");
    assert_eq!(rc.table_format, TableFormat::Aligned);
    assert_eq!(rc.logging.level, "info");
}

#[test]
fn partial_config_fills_defaults() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    write_file(&cfg_path, "version = 1\n\n[preview]\nhighlight_background = \"pink\"\n");

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.preview.mark_background, "pink");
    assert_eq!(rc.preview.mark_foreground, "black");
    assert_eq!(rc.table_format, TableFormat::Aligned);
}

#[test]
fn log_file_path_resolved() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    let log_path = tmp.path().join("logs").join("mdpad.log");
    let toml = format!(
        "version = 1\n\n[logging]\nlevel = \"info\"\nfile = \"{}\"\nfile_level = \"trace\"\n",
        log_path.display()
    );
    write_file(&cfg_path, &toml);

    let rc = ConfigLoader::load(Some(&cfg_path)).expect("should load");
    assert_eq!(rc.logging.file.as_deref(), Some(log_path.as_path()));
    assert_eq!(rc.logging.file_level.as_deref(), Some("trace"));
}

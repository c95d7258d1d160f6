use std::fs;

use assert_cmd::prelude::*;
use tempfile::tempdir;

fn mdp() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("mdp"))
}

#[test]
fn simple_table_scaffold() {
    let tmp = tempdir().unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["table", "--columns", "2", "--rows", "2", "--format", "simple"]);

    cmd.assert().success().stdout(predicates::str::diff(
        "| Header 1 | Header 2 |\n\
         | --- | --- |\n\
         | Cell 1,1 | Cell 1,2 |\n\
         | Cell 2,1 | Cell 2,2 |\n",
    ));
}

#[test]
fn aligned_table_scaffold() {
    let tmp = tempdir().unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["table", "--columns", "2", "--rows", "1", "--format", "aligned"]);

    cmd.assert().success().stdout(predicates::str::diff(
        "| Header 1 | Header 2 |\n\
         |----------|----------|\n\
         | Cell 1,1 | Cell 1,2 |\n",
    ));
}

#[test]
fn config_sets_default_format() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("mdpad");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(cfg_dir.join("config.toml"), "version = 1\n\n[table]\nformat = \"simple\"\n")
        .unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["table", "--columns", "1", "--rows", "1"]);

    cmd.assert().success().stdout(predicates::str::diff(
        "| Header 1 |\n\
         | --- |\n\
         | Cell 1,1 |\n",
    ));
}

#[test]
fn missing_dimensions_fail_in_batch_mode() {
    let tmp = tempdir().unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("table");
    cmd.write_stdin("");

    cmd.assert().failure().code(2).stderr(predicates::str::contains("batch mode"));
}

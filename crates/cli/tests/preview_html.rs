use std::fs;

use assert_cmd::prelude::*;
use tempfile::tempdir;

fn mdp() -> std::process::Command {
    std::process::Command::new(assert_cmd::cargo::cargo_bin!("mdp"))
}

#[test]
fn preview_applies_dialect_extensions() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("doc.md");
    fs::write(&input, "~~old~~ and ==new==\n").unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["preview", input.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("<s>old</s>"))
        .stdout(predicates::str::contains("<mark>new</mark>"))
        .stdout(predicates::str::starts_with("<style>\nmark { background-color: yellow; color: black; }"));
}

#[test]
fn preview_marks_images_resizable() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("doc.md");
    fs::write(&input, "![a](u.png)\n").unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["preview", input.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("<img class=\"resizable\" "))
        .stdout(predicates::str::contains("src=\"u.png\""));
}

#[test]
fn preview_honors_configured_colors() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("mdpad");
    fs::create_dir_all(&cfg_dir).unwrap();
    fs::write(
        cfg_dir.join("config.toml"),
        "version = 1\n\n[preview]\nhighlight_background = \"orange\"\n",
    )
    .unwrap();

    let input = tmp.path().join("doc.md");
    fs::write(&input, "==x==\n").unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["preview", input.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("background-color: orange; color: black;"));
}

#[test]
fn preview_writes_output_file() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("doc.md");
    let output = tmp.path().join("doc.html");
    fs::write(&input, "# T\n").unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args([
        "preview",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    cmd.assert().success();
    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<style>"));
    assert!(html.contains("<h1>T</h1>"));
}

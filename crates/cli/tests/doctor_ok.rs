use std::fs;

use assert_cmd::prelude::*;
use tempfile::tempdir;

fn mdp() -> std::process::Command {
    std::process::Command::new(assert_cmd::cargo::cargo_bin!("mdp"))
}

#[test]
fn doctor_reports_defaults_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = mdp();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.env("NO_COLOR", "1");
    cmd.arg("doctor");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   mdp doctor"))
        .stdout(predicates::str::contains("defaults in effect"))
        .stdout(predicates::str::contains("preview.highlight_background: yellow"))
        .stdout(predicates::str::contains("table.format: aligned"))
        .stdout(predicates::str::contains("logging.level: info"));
}

#[test]
fn doctor_reports_resolved_config() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(
        &cfg_path,
        "version = 1\n\n[preview]\nhighlight_background = \"orange\"\n\n[table]\nformat = \"simple\"\n",
    )
    .unwrap();

    let mut cmd = mdp();
    cmd.env("NO_COLOR", "1");
    cmd.args(["doctor", "--config", cfg_path.to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("OK   mdp doctor"))
        .stdout(predicates::str::contains("preview.highlight_background: orange"))
        .stdout(predicates::str::contains("table.format: simple"));
}

use std::fs;

use assert_cmd::prelude::*;
use tempfile::tempdir;

fn mdp() -> std::process::Command {
    std::process::Command::new(assert_cmd::cargo::cargo_bin!("mdp"))
}

#[test]
fn doctor_fails_on_invalid_toml() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(&cfg_path, "version = [broken").unwrap();

    let mut cmd = mdp();
    cmd.env("NO_COLOR", "1");
    cmd.args(["doctor", "--config", cfg_path.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("FAIL mdp doctor"))
        .stdout(predicates::str::contains("failed to parse TOML"));
}

#[test]
fn doctor_fails_on_bad_version() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("config.toml");
    fs::write(&cfg_path, "version = 99\n").unwrap();

    let mut cmd = mdp();
    cmd.env("NO_COLOR", "1");
    cmd.args(["doctor", "--config", cfg_path.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains("FAIL mdp doctor"))
        .stdout(predicates::str::contains("version 99 is unsupported"));
}

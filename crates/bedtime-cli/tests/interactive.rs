//! Interactive mode integration tests.
//!
//! Drives the stdin edit loop end to end: every accepted edit must produce
//! exactly one recomputed recommendation.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use assert_cmd::Command;
use predicates::prelude::*;

/// A command isolated from any real user configuration.
fn bedtime(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bedtime").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path());
    cmd
}

#[test]
fn test_renders_once_on_entry() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = bedtime(&dir);
    cmd.arg("interactive").write_stdin("quit\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::is_match(r"^Your ideal bedtime is \d{2}:\d{2}\n$").unwrap());
}

#[test]
fn test_each_edit_recomputes() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = bedtime(&dir);
    cmd.arg("interactive")
        .write_stdin("sleep 7.0\ncoffee 3\nquit\n");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    // Entry render plus one per edit.
    assert_eq!(stdout.lines().count(), 3);
    for line in stdout.lines() {
        assert!(line.starts_with("Your ideal bedtime is "), "got: {line}");
    }
}

#[test]
fn test_invalid_edit_reports_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = bedtime(&dir);
    cmd.arg("interactive")
        .write_stdin("sleep 99\nwake 06:00\nquit\n");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("error: sleep amount"));
    // The session continued after the rejected edit.
    assert_eq!(
        stdout
            .lines()
            .filter(|l| l.starts_with("Your ideal bedtime is "))
            .count(),
        2
    );
}

#[test]
fn test_starting_inputs_from_flags() {
    let dir = tempfile::tempdir().unwrap();

    // A deterministic check against the recommend command: the entry render
    // must match what recommend prints for the same inputs.
    let recommend = bedtime(&dir)
        .args(["--wake", "06:00", "--sleep", "7.5", "--coffee", "2"])
        .output()
        .unwrap();

    let interactive = bedtime(&dir)
        .args(["interactive", "--wake", "06:00", "--sleep", "7.5", "--coffee", "2"])
        .write_stdin("quit\n")
        .output()
        .unwrap();

    assert_eq!(recommend.stdout, interactive.stdout);
}

#[test]
fn test_broken_model_exits_with_prediction_failure() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("broken.safetensors");
    std::fs::write(&model_path, b"garbage").unwrap();

    let mut cmd = bedtime(&dir);
    cmd.arg("interactive")
        .arg("--model")
        .arg(&model_path)
        .write_stdin("quit\n");

    cmd.assert()
        .code(1)
        .stdout("Sorry, there was an error calculating your bedtime\n");
}

//! Output format tests.
//!
//! Tests text and JSON rendering of recommendations against a known
//! artifact so expected values are exact.

#![allow(clippy::unwrap_used)]
#![allow(deprecated)] // cargo_bin deprecation

use std::collections::HashMap;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

/// A command isolated from any real user configuration.
fn bedtime(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bedtime").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path());
    cmd
}

/// Write an artifact whose prediction is exactly `3600 * sleep_hours`.
fn write_passthrough_artifact(dir: &tempfile::TempDir) -> PathBuf {
    use safetensors::tensor::TensorView;

    let weight: Vec<f32> = vec![0.0, 3600.0, 0.0];
    let bias: Vec<f32> = vec![0.0];

    let weight_view =
        TensorView::new(safetensors::Dtype::F32, vec![1, 3], bytemuck::cast_slice(&weight))
            .unwrap();
    let bias_view =
        TensorView::new(safetensors::Dtype::F32, vec![1], bytemuck::cast_slice(&bias)).unwrap();

    let tensors = HashMap::from([
        ("linear.weight".to_string(), weight_view),
        ("linear.bias".to_string(), bias_view),
    ]);
    let serialized = safetensors::serialize(&tensors, &None).unwrap();

    let path = dir.path().join("passthrough.safetensors");
    std::fs::write(&path, serialized).unwrap();
    path
}

// === Text Format ===

#[test]
fn test_text_output_exact_bedtime() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_passthrough_artifact(&dir);

    let mut cmd = bedtime(&dir);
    cmd.arg("--model")
        .arg(&model)
        .arg("--wake")
        .arg("07:00")
        .arg("--sleep")
        .arg("8.0");

    // 07:00 minus exactly eight hours.
    cmd.assert()
        .success()
        .stdout("Your ideal bedtime is 23:00\n");
}

#[test]
fn test_text_output_rolls_over_midnight() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_passthrough_artifact(&dir);

    let mut cmd = bedtime(&dir);
    cmd.arg("--model")
        .arg(&model)
        .arg("--wake")
        .arg("01:00")
        .arg("--sleep")
        .arg("4.0");

    cmd.assert()
        .success()
        .stdout("Your ideal bedtime is 21:00\n");
}

// === JSON Format ===

#[test]
fn test_json_output_fields() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_passthrough_artifact(&dir);

    let mut cmd = bedtime(&dir);
    cmd.arg("--format")
        .arg("json")
        .arg("--model")
        .arg(&model)
        .arg("--wake")
        .arg("06:30")
        .arg("--sleep")
        .arg("7.5")
        .arg("--coffee")
        .arg("2");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["wake_time"], "06:30");
    assert_eq!(parsed["sleep_hours"], 7.5);
    assert_eq!(parsed["coffee_cups"], 2);
    assert_eq!(parsed["bedtime"], "23:00");
    assert_eq!(parsed["predicted_sleep_seconds"], 27_000.0);
    assert!(parsed["timestamp"].as_str().unwrap().contains('T'));
}

#[test]
fn test_json_output_is_single_line() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = bedtime(&dir);
    cmd.arg("--format").arg("json");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn test_json_pretty_output_is_multiline_and_parses() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = bedtime(&dir);
    cmd.arg("--format").arg("json").arg("--pretty");

    let output = cmd.output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().count() > 1);

    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed["bedtime"].is_string());
}

#[test]
fn test_invalid_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = bedtime(&dir);
    cmd.arg("--format").arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("text").or(predicate::str::contains("json")));
}

// === Model Subcommand ===

#[test]
fn test_model_info_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = bedtime(&dir);
    cmd.arg("model").arg("info");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("built-in").and(predicate::str::contains("coffee weight")));
}

#[test]
fn test_model_info_artifact_coefficients() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_passthrough_artifact(&dir);

    let mut cmd = bedtime(&dir);
    cmd.arg("model").arg("info").arg("--model").arg(&model);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3600.000"));
}

#[test]
fn test_model_check_valid_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let model = write_passthrough_artifact(&dir);

    let mut cmd = bedtime(&dir);
    cmd.arg("model").arg("check").arg("--model").arg(&model);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("ok:"));
}

#[test]
fn test_model_check_missing_artifact_fails_loudly() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = bedtime(&dir);
    cmd.arg("model")
        .arg("check")
        .arg("--model")
        .arg("/nonexistent/sleep.safetensors");

    // Management command: the real cause is reported, exit code 2.
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("not usable"));
}

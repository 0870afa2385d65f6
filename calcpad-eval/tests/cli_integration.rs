//! CLI integration tests for calcpad-eval

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the user's config file
fn calcpad_eval() -> (Command, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("calcpad-eval").unwrap();
    cmd.env("CALCPAD_CONFIG", temp_dir.path().join("config.toml"))
        .env_remove("CALCPAD_RECOVERY_POLICY")
        .env_remove("RUST_LOG");
    (cmd, temp_dir)
}

#[test]
fn test_help_flag_output() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Evaluate calculator key sequences"))
        .stdout(predicate::str::contains("--settle"));
}

#[test]
fn test_addition() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.arg("2+53=").assert().success().stdout("55\n");
}

#[test]
fn test_rounding() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.arg(".1+.2=").assert().success().stdout("0.3\n");
}

#[test]
fn test_keys_from_stdin() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.write_stdin("9 * 9 =\n")
        .assert()
        .success()
        .stdout("81\n");
}

#[test]
fn test_divide_by_zero_shows_message() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.arg("10/0=")
        .assert()
        .success()
        .stdout("Cannot divide by zero\n");
}

#[test]
fn test_settle_recovers_from_error() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.args(["10/0=", "--settle"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_json_output() {
    let (mut cmd, _dir) = calcpad_eval();

    let output = cmd.args(["7*", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["display"], "7");
    assert_eq!(json["pending_operand"], "7");
    assert_eq!(json["pending_operator"], "multiply");
    assert_eq!(json["error"], false);
}

#[test]
fn test_long_result_display() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.arg("123456789*1000000=")
        .assert()
        .success()
        .stdout("1.234568e+14\n");
}

#[test]
fn test_steps_output() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.args(["12<", "--steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("   1 | 1"))
        .stdout(predicate::str::contains("   2 | 12"));
}

#[test]
fn test_unknown_key_exits_with_invalid_input() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.arg("12?3")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown key '?' at position 2"));
}

#[test]
fn test_fire_anyway_policy_flag() {
    let (mut cmd, _dir) = calcpad_eval();

    // The late recovery wipes the entry typed after the error
    cmd.args(["10/0=C42", "--policy", "fire-anyway", "--settle"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_cancel_on_input_keeps_later_entry() {
    let (mut cmd, _dir) = calcpad_eval();

    cmd.args(["10/0=C42", "--settle"])
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn test_policy_from_config_file() {
    let (mut cmd, dir) = calcpad_eval();
    fs::write(
        dir.path().join("config.toml"),
        "[recovery]\npolicy = \"fire-anyway\"\n",
    )
    .unwrap();

    cmd.args(["1/0=5", "--settle"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_invalid_config_exits_with_config_error() {
    let (mut cmd, dir) = calcpad_eval();
    fs::write(dir.path().join("config.toml"), "[recovery]\ndelay_ms = 0\n").unwrap();

    cmd.arg("1+1=")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("recovery.delay_ms"));
}

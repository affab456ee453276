//! Tests for error reporting and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn greeter(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("greeter").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("GREETER_OUTPUT__TARGET")
        .env_remove("GREETER_OUTPUT__FILE")
        .env_remove("GREETER_OUTPUT__NO_COLOR")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_empty_name_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    greeter(&dir)
        .arg("")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Error: name cannot be empty"))
        .stderr(predicate::str::contains("Please provide a valid name."));
}

#[test]
fn test_over_length_name_is_a_user_error() {
    let dir = TempDir::new().unwrap();
    greeter(&dir)
        .arg("a".repeat(101))
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("exceeds maximum length"));
}

#[test]
fn test_json_error_report() {
    let dir = TempDir::new().unwrap();
    greeter(&dir)
        .args(["--error-format", "json", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""kind":"validation""#))
        .stderr(predicate::str::contains(r#""exit_code":2"#));
}

#[test]
fn test_missing_config_file_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    greeter(&dir)
        .args(["--config", "does-not-exist.toml", "Alice"])
        .assert()
        .code(4)
        .stdout("")
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_file_target_without_path_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("greeter.toml");
    fs::write(&config, "[output]\ntarget = \"file\"\n").unwrap();

    greeter(&dir)
        .arg("--config")
        .arg(&config)
        .arg("Alice")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("output.file is not set"));
}

#[test]
fn test_unwritable_output_is_an_internal_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("out.txt");

    greeter(&dir)
        .arg("Alice")
        .arg("--output")
        .arg(&path)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("write failed: cannot open"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_rejected_name_does_not_create_output_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    greeter(&dir)
        .arg("")
        .arg("--output")
        .arg(&path)
        .assert()
        .code(2)
        .stdout("");

    assert!(!path.exists());
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    greeter(&dir)
        .args(["--shout", "Alice"])
        .assert()
        .code(2);
}

//! Integration tests for config warning behavior.
//!
//! These tests verify that the CLI properly warns users when config files have errors.

use std::fs;
use std::process::Command;

/// `project show` loads config only once a project is selected, so every
/// test selects one through the state file first.
fn run_show(dir: &std::path::Path) -> std::process::Output {
    fs::write(dir.join("state.json"), r#"{"currentProject": "p1"}"#)
        .expect("Failed to write state file");

    // Port 1 is reserved and closed on test machines; the fetch fails fast.
    Command::new(env!("CARGO_BIN_EXE_hostpanel"))
        .current_dir(dir)
        .env("HOME", dir)
        .env("HOSTPANEL_STATE_FILE", dir.join("state.json"))
        .env("HOSTPANEL_API_URL", "http://127.0.0.1:1")
        .args(["project", "show"])
        .output()
        .expect("Failed to execute hostpanel")
}

#[test]
fn test_config_warning_on_invalid_toml() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".hostpanel");
    fs::create_dir_all(&config_dir).expect("Failed to create .hostpanel dir");

    fs::write(config_dir.join("config.toml"), "invalid toml [[[")
        .expect("Failed to write invalid config");

    let output = run_show(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
    assert!(
        stderr.contains("Tip: Check"),
        "Expected tip about config files in stderr, got: {}",
        stderr
    );
    // The environment override still applies to the fallback config.
    assert!(
        stderr.contains("127.0.0.1:1"),
        "Expected the env base URL to be used, got: {}",
        stderr
    );
}

#[test]
fn test_config_warning_on_zero_timeout() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".hostpanel");
    fs::create_dir_all(&config_dir).expect("Failed to create .hostpanel dir");

    fs::write(
        config_dir.join("config.toml"),
        r#"
[api]
timeout_secs = 0
"#,
    )
    .expect("Failed to write config");

    let output = run_show(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains("Warning: Could not load config"),
        "Expected warning in stderr, got: {}",
        stderr
    );
}

#[test]
fn test_no_warning_on_valid_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config_dir = temp_dir.path().join(".hostpanel");
    fs::create_dir_all(&config_dir).expect("Failed to create .hostpanel dir");

    fs::write(
        config_dir.join("config.toml"),
        r#"
[api]
base_url = "http://localhost:3000"
timeout_secs = 5

[notify]
locale = "id"
"#,
    )
    .expect("Failed to write valid config");

    let output = run_show(temp_dir.path());
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains("Warning: Could not load config"),
        "Unexpected config warning in stderr: {}",
        stderr
    );
}

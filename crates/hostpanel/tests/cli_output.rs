//! Integration tests for CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::{Command, Output};

/// Execute 'hostpanel project show' with no project selected.
fn run_show(verbose: bool) -> Output {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hostpanel"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("HOSTPANEL_STATE_FILE", dir.path().join("state.json"))
        .env_remove("RUST_LOG");
    if verbose {
        cmd.arg("-v");
    }
    let output = cmd
        .args(["project", "show"])
        .output()
        .expect("Failed to execute 'hostpanel project show'");

    assert!(
        output.status.success(),
        "hostpanel project show failed with exit code {:?}. stderr: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

/// Verify stdout has only user-facing text and stderr is empty by default
#[test]
fn test_default_mode_is_quiet() {
    let output = run_show(false);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stdout.contains("No project selected."),
        "stdout should contain user-facing output, got: {}",
        stdout
    );
    assert!(
        !stdout.contains(r#""event":"#),
        "stdout should not contain JSON logs, got: {}",
        stdout
    );
    assert!(
        stderr.is_empty(),
        "Default mode should not log anything on success, got: {}",
        stderr
    );
}

/// Verify that verbose mode emits INFO-level JSON logs on stderr only
#[test]
fn test_verbose_mode_emits_logs() {
    let output = run_show(true);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, got: {}",
        stderr
    );
    assert!(
        stderr.contains(r#""event":"core.app.startup_completed""#),
        "Verbose mode should log startup, got: {}",
        stderr
    );

    for line in stdout.lines() {
        assert!(
            !line.trim().starts_with('{'),
            "stdout contains JSON line: {}",
            line
        );
    }
}

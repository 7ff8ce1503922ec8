#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn create_qapp(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("create-qapp").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

// ---------------------------------------------------------------------------
// Command-line surface
// ---------------------------------------------------------------------------

#[test]
fn help_describes_the_tool() {
    let dir = TempDir::new().unwrap();
    create_qapp(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create a new Qortal App"));
}

#[test]
fn version_flag_prints_version() {
    let dir = TempDir::new().unwrap();
    create_qapp(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("create-qapp 1.0.0"));
}

#[test]
fn positional_arguments_are_rejected() {
    let dir = TempDir::new().unwrap();
    create_qapp(&dir).arg("my-app").assert().failure();
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// ---------------------------------------------------------------------------
// Interactive run
// ---------------------------------------------------------------------------

#[test]
fn non_interactive_terminal_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    create_qapp(&dir)
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error: prompt failed"));

    // Nothing is created when the name prompt cannot run.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn rust_log_enables_debug_output() {
    let dir = TempDir::new().unwrap();
    create_qapp(&dir)
        .env("RUST_LOG", "debug")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stage transition"));
}

#[test]
fn default_log_level_hides_debug_output() {
    let dir = TempDir::new().unwrap();
    create_qapp(&dir)
        .env_remove("RUST_LOG")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stage transition").not());
}

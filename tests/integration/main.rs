//! Integration tests for the vigil check binaries
//!
//! These tests run the real binaries end to end: bind arguments, probe
//! the host, and assert on the rendered line and the exit code a
//! scheduler would see.

// Include kernel-version tests from the same directory
mod kernel_version_test;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a check_disk command
fn check_disk() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("check_disk"))
}

#[test]
fn help_exits_with_the_unknown_code() {
    check_disk()
        .arg("--help")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("--warn"))
        .stdout(predicate::str::contains("--path"));
}

#[test]
fn malformed_threshold_exits_with_the_unknown_code() {
    check_disk()
        .args(["-w", "ten"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must be an integer or float"));
}

#[test]
fn unknown_flag_exits_with_the_unknown_code() {
    check_disk().arg("--bogus").assert().code(3);
}

#[test]
fn satisfied_check_reports_ok() {
    let dir = TempDir::new().unwrap();
    check_disk()
        .args(["-p", dir.path().to_str().unwrap(), "-w", "0:"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_match(r"^OK: Mountpoint .+ has \d+MB free\.\n$").unwrap());
}

#[test]
fn free_space_below_the_floor_warns() {
    let dir = TempDir::new().unwrap();
    check_disk()
        .args(["-p", dir.path().to_str().unwrap(), "-w", "999999999:"])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("WARNING:"));
}

#[test]
fn critical_floor_overrides_the_warning_floor() {
    let dir = TempDir::new().unwrap();
    check_disk()
        .args([
            "-p",
            dir.path().to_str().unwrap(),
            "-w",
            "999999999:",
            "-c",
            "999999999:",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("CRITICAL:"));
}

#[test]
fn missing_path_reports_unknown_through_the_status_channel() {
    check_disk()
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN:"))
        .stdout(predicate::str::contains("--path"));
}

#[test]
fn unreadable_path_reports_unknown() {
    check_disk()
        .args(["-p", "/definitely/not/a/mountpoint"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN:"));
}

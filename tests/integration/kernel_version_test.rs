//! Integration tests for the kernel-version check

use assert_cmd::cargo;
use predicates::prelude::*;

/// Helper function to create a check_kernel_version command
fn check_kernel_version() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("check_kernel_version"))
}

#[test]
fn matching_pattern_reports_ok() {
    // Every release string has at least one character.
    check_kernel_version()
        .args(["-e", "."])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK: check_kernel_version"));
}

#[test]
fn absent_pattern_matches_everything() {
    check_kernel_version().assert().code(0);
}

#[test]
fn mismatched_pattern_reports_critical() {
    check_kernel_version()
        .args(["-e", "definitely-not-a-kernel-release"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("does not match"));
}

#[test]
fn invalid_pattern_reports_unknown() {
    check_kernel_version()
        .args(["-e", "("])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN:"));
}

#[test]
fn help_exits_with_the_unknown_code() {
    check_kernel_version()
        .arg("--help")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("--expect"));
}

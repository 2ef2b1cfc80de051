//! Integration tests for the `datespan` binary.
//!
//! These exercise the demonstration output through the actual binary, pinning
//! the clock with `--at` so every projected date is exact.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn fixed_instant_output_is_exact() {
    Command::cargo_bin("datespan")
        .unwrap()
        .args(["--at", "2026-01-15T12:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "now:                    2026-01-15 12:00:00 UTC",
        ))
        .stdout(predicate::str::contains(
            "8 days later:           2026-01-23 12:00:00 UTC",
        ))
        .stdout(predicate::str::contains(
            "2 weeks before:         2026-01-01 12:00:00 UTC",
        ))
        .stdout(predicate::str::contains(
            "5 days, 3 months later: 2026-04-20 12:00:00 UTC",
        ));
}

#[test]
fn offset_instants_are_normalized_to_utc() {
    // +02:00 input projects from the equivalent UTC instant.
    Command::cargo_bin("datespan")
        .unwrap()
        .args(["--at", "2026-01-15T14:00:00+02:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "now:                    2026-01-15 12:00:00 UTC",
        ));
}

#[test]
fn system_clock_run_prints_all_four_lines() {
    Command::cargo_bin("datespan")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("now:"))
        .stdout(predicate::str::contains("8 days later:"))
        .stdout(predicate::str::contains("2 weeks before:"))
        .stdout(predicate::str::contains("5 days, 3 months later:"));
}

#[test]
fn invalid_instant_is_a_clean_error() {
    Command::cargo_bin("datespan")
        .unwrap()
        .args(["--at", "yesterday-ish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a valid RFC 3339 instant"));
}

//! End-to-end tests for the `bibid` command line.

use assert_cmd::Command;
use predicates::prelude::*;

fn bibid() -> Command {
    Command::cargo_bin("bibid").unwrap()
}

#[test]
fn test_to10_strict() {
    bibid()
        .args(["to10", "--strict", "978-0-306-40615-7"])
        .assert()
        .success()
        .stdout("0306406152\n");
}

#[test]
fn test_to10_strict_rejects_isbn10() {
    bibid()
        .args(["to10", "--strict", "0306406152"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected format"));
}

#[test]
fn test_to10_lenient_passes_isbn10_through() {
    bibid()
        .args(["to10", "0306406152"])
        .assert()
        .success()
        .stdout("0306406152\n");
}

#[test]
fn test_to13_multiple_values() {
    bibid()
        .args(["to13", "0306406152", "78"])
        .assert()
        .success()
        .stdout("9780306406157\n9780000000071\n");
}

#[test]
fn test_checksum10_x() {
    bibid()
        .args(["checksum10", "020161622"])
        .assert()
        .success()
        .stdout("X\n");
}

#[test]
fn test_checksum13() {
    bibid()
        .args(["checksum13", "978030640615"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_patch10() {
    bibid()
        .args(["patch10", "78"])
        .assert()
        .success()
        .stdout("0000000078\n");
}

#[test]
fn test_validate_reports_each_value() {
    bibid()
        .args(["validate", "0306406152", "0306406153"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("0306406152\tvalid"))
        .stdout(predicate::str::contains("0306406153\tinvalid"));
}

#[test]
fn test_validate_isbn13_only() {
    bibid()
        .args(["validate", "--isbn13", "0306406152"])
        .assert()
        .failure();
}

#[test]
fn test_clean() {
    bibid()
        .args(["clean", "PR9199.3 .M3823 H35 2001 c.2"])
        .assert()
        .success()
        .stdout("PR9199.3 .M3823 H35 2001\n");
}

#[test]
fn test_check_call_number() {
    bibid()
        .args(["check-call-number", "[QRT] HD1691 .S85", "123ABC"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[QRT] HD1691 .S85\tvalid"))
        .stdout(predicate::str::contains("123ABC\tinvalid"));
}

#[test]
fn test_missing_values_is_usage_error() {
    bibid().arg("to13").assert().failure();
}

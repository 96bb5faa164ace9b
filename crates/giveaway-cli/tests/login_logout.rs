//! Integration tests for `giveaway login` and `giveaway logout`.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn test_login_with_flag_writes_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("giveaway")
        .env("GIVEAWAY_HOME", dir.path())
        .args(["login", "--key", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in"));

    let raw = fs::read_to_string(dir.path().join("session.json")).unwrap();
    let session: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(session["key"], "abc123");
    assert_eq!(session["cookie"], "co-auth=abc123");
}

#[test]
fn test_login_reads_key_from_stdin() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("giveaway")
        .env("GIVEAWAY_HOME", dir.path())
        .arg("login")
        .write_stdin("  piped-key\n")
        .assert()
        .success();

    let raw = fs::read_to_string(dir.path().join("session.json")).unwrap();
    let session: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(session["key"], "piped-key");
}

#[test]
fn test_login_rejects_empty_key() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("giveaway")
        .env("GIVEAWAY_HOME", dir.path())
        .arg("login")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));

    assert!(!dir.path().join("session.json").exists());
}

#[test]
fn test_logout_removes_session() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("giveaway")
        .env("GIVEAWAY_HOME", dir.path())
        .args(["login", "--key", "abc123"])
        .assert()
        .success();

    cargo_bin_cmd!("giveaway")
        .env("GIVEAWAY_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));
    assert!(!dir.path().join("session.json").exists());

    cargo_bin_cmd!("giveaway")
        .env("GIVEAWAY_HOME", dir.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("No session to remove."));
}

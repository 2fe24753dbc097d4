use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn ajfses(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ajfses");
    cmd.env("AJFSES_HOME", home)
        .env_remove("AJFSES_AUTH_TOKEN")
        .env_remove("AJFSES_AUTH_USER");
    cmd
}

#[test]
fn test_status_without_credentials() {
    let dir = tempdir().unwrap();

    ajfses(dir.path())
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("not authenticated\n"));
}

#[test]
fn test_login_status_logout() {
    let dir = tempdir().unwrap();

    ajfses(dir.path())
        .args(["auth", "login", "--token", "abc123", "--user", "ana"])
        .assert()
        .success();

    let storage = fs::read_to_string(dir.path().join("storage.json")).unwrap();
    let values: serde_json::Value = serde_json::from_str(&storage).unwrap();
    assert_eq!(values["auth_token"], "abc123");
    assert_eq!(values["auth_user"], "ana");

    ajfses(dir.path())
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("authenticated as ana\n"));

    ajfses(dir.path())
        .args(["auth", "logout"])
        .assert()
        .success();

    ajfses(dir.path())
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("not authenticated\n"));
}

#[test]
fn test_session_scope_from_environment() {
    let dir = tempdir().unwrap();

    ajfses(dir.path())
        .env("AJFSES_AUTH_TOKEN", "abc123")
        .env("AJFSES_AUTH_USER", "bea")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("authenticated as bea\n"));
}

#[test]
fn test_persistent_scope_wins_over_session() {
    let dir = tempdir().unwrap();
    ajfses(dir.path())
        .args(["auth", "login", "--token", "abc123", "--user", "ana"])
        .assert()
        .success();

    ajfses(dir.path())
        .env("AJFSES_AUTH_USER", "bea")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("authenticated as ana\n"));
}

#[test]
fn test_token_without_user_is_not_authenticated() {
    let dir = tempdir().unwrap();

    ajfses(dir.path())
        .env("AJFSES_AUTH_TOKEN", "abc123")
        .env("AJFSES_AUTH_USER", "")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("not authenticated\n"));
}

#[test]
fn test_corrupt_storage_degrades_to_session_scope() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("storage.json"), "{not json").unwrap();

    ajfses(dir.path())
        .env("AJFSES_AUTH_TOKEN", "abc123")
        .env("AJFSES_AUTH_USER", "bea")
        .args(["auth", "status"])
        .assert()
        .success()
        .stdout(predicate::str::diff("authenticated as bea\n"));
}

#[test]
fn test_login_rejects_empty_values() {
    let dir = tempdir().unwrap();

    ajfses(dir.path())
        .args(["auth", "login", "--token", "", "--user", "ana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be non-empty"));
}

//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn stampbar() -> Command {
    Command::cargo_bin("stampbar").unwrap()
}

#[test]
fn config_get_unknown_key() {
    stampbar()
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"))
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_unknown_key() {
    stampbar()
        .args(["config", "set", "unknown_key", "value"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"))
        .stderr(predicate::str::contains("notify, journal_suffix"));
}

#[test]
fn config_set_invalid_boolean() {
    stampbar()
        .args(["config", "set", "notify", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true"))
        .stderr(predicate::str::contains("false"));
}

#[test]
fn config_set_template_without_placeholder() {
    stampbar()
        .args(["config", "set", "front_matter.template", "no date here"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("{date}"));
}

#[test]
fn copy_rejects_unknown_stamp() {
    stampbar()
        .args(["copy", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn show_rejects_unknown_stamp() {
    stampbar()
        .args(["show", "century"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn config_list_with_no_file() {
    // config list works without a config file, showing unset keys
    stampbar()
        .env("HOME", "/nonexistent")
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not set"));
}

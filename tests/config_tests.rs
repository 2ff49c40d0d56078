//! Config round-trip integration tests
//!
//! Each test gets its own temp directory for HOME/XDG_CONFIG_HOME so
//! runs never touch the host user's config or each other.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stampbar_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stampbar").unwrap();
    cmd.env("HOME", dir);
    cmd.env("XDG_CONFIG_HOME", dir);
    cmd
}

#[test]
fn config_init_creates_the_file() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config file created at"));
}

#[test]
fn config_init_twice_fails() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    stampbar_in(dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    stampbar_in(dir.path())
        .args(["config", "get", "notify"])
        .assert()
        .success()
        .stdout("false\n");

    stampbar_in(dir.path())
        .args(["config", "get", "journal_suffix"])
        .assert()
        .success()
        .stdout("... \n");
}

#[test]
fn config_get_without_file_reports_unset() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "get", "notify"])
        .assert()
        .success()
        .stdout("(not set)\n");
}

#[test]
fn config_set_then_get_round_trips() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "set", "journal_suffix", " | "])
        .assert()
        .success()
        .stderr(predicate::str::contains("journal_suffix"));

    stampbar_in(dir.path())
        .args(["config", "get", "journal_suffix"])
        .assert()
        .success()
        .stdout(" | \n");
}

#[test]
fn config_set_notify_shows_in_list() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "set", "notify", "true"])
        .assert()
        .success();

    stampbar_in(dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notify: true"));
}

#[test]
fn config_set_template_round_trips_newlines() {
    let dir = TempDir::new().unwrap();
    let template = "---\ncreated: {date}\n---\n";

    stampbar_in(dir.path())
        .args(["config", "set", "front_matter.template", template])
        .assert()
        .success();

    stampbar_in(dir.path())
        .args(["config", "get", "front_matter.template"])
        .assert()
        .success()
        .stdout(format!("{}\n", template));
}

#[test]
fn configured_suffix_flows_into_show() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args(["config", "set", "journal_suffix", " >> "])
        .assert()
        .success();

    stampbar_in(dir.path())
        .args(["show", "journal"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" >> \n"));
}

#[test]
fn configured_template_flows_into_show() {
    let dir = TempDir::new().unwrap();

    stampbar_in(dir.path())
        .args([
            "config",
            "set",
            "front_matter.template",
            "---\ncreated: {date}\n---\n",
        ])
        .assert()
        .success();

    stampbar_in(dir.path())
        .args(["show", "front-matter"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\ncreated: "))
        .stdout(
            predicate::str::is_match(
                r"created: \d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[+-]\d{2}:\d{2}\n",
            )
            .unwrap(),
        );
}

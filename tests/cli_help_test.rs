//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn glad() -> Command {
    let mut cmd = Command::cargo_bin("glad").unwrap();
    cmd.env_remove("GLAD_CONFIG")
        .env_remove("GLAD_API_URL")
        .env_remove("GLAD_LOCAL_FILE")
        .env_remove("GLAD_OFFLINE");
    cmd
}

#[test]
fn test_root_help() {
    glad()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive news"))
        .stdout(predicate::str::contains("--offline"));
}

#[test]
fn test_feed_help() {
    glad()
        .args(["feed", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FILTERS"))
        .stdout(predicate::str::contains("--min-score"));
}

#[test]
fn test_browse_help() {
    glad()
        .args(["browse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse the news feed interactively"));
}

#[test]
fn test_topics_help() {
    glad()
        .args(["topics", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List topics"));
}

#[test]
fn test_sources_help() {
    glad()
        .args(["sources", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List news sources"));
}

#[test]
fn test_regions_help() {
    glad()
        .args(["regions", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--top"));
}

#[test]
fn test_pages_and_all_conflict() {
    glad()
        .args(["feed", "--pages", "2", "--all"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

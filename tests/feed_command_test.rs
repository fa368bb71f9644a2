//! glad feed / topics / regions integration tests
//!
//! HOME を一時ディレクトリに向け、API は使わずローカル JSON と組み込み記事で動かす。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn glad(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("glad").unwrap();
    cmd.env("HOME", home)
        .env("GLAD_LOG", "warn")
        .env_remove("GLAD_CONFIG")
        .env_remove("GLAD_API_URL")
        .env_remove("GLAD_LOCAL_FILE")
        .env_remove("GLAD_OFFLINE");
    cmd
}

fn feed_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

fn scores(json: &Value) -> Vec<f64> {
    json["articles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["positivity_score"].as_f64().unwrap())
        .collect()
}

const LOCAL_DOCUMENT: &str = r#"{
  "articles": [
    {
      "id": 101,
      "title": "Ny cykelbana i Lund",
      "summary": "Kommunen bygger ut cykelnätet.",
      "source": { "id": 7, "name": "Sydsvenskan" },
      "published_date": "2025-04-02T08:15:00+02:00",
      "positivity_score": 0.88,
      "topics": [{ "id": 7, "name": "Transport" }],
      "region": "Skåne",
      "image_url": "",
      "url": "https://example.se/cykel"
    },
    {
      "id": 102,
      "title": "Rekordår för fjällturismen",
      "summary": "Fler besökare än någonsin.",
      "source": { "id": 8, "name": "Dalarnas Tidningar" },
      "published_date": "2025-04-01T17:40:00+02:00",
      "positivity_score": 0.76,
      "topics": [{ "id": 5, "name": "Ekonomi" }],
      "region": "Dalarna",
      "image_url": "",
      "url": "https://example.se/fjall"
    }
  ]
}"#;

#[test]
fn test_offline_without_local_file_uses_builtin_articles() {
    let home = TempDir::new().unwrap();
    let json = feed_json(glad(home.path()).args([
        "feed",
        "--offline",
        "--local-file",
        "missing.json",
        "--all",
        "--json",
    ]));

    assert_eq!(json["source"], "hardcoded fallback data");
    assert_eq!(json["matched"], 6);
    assert_eq!(json["has_more"], false);
    assert_eq!(scores(&json).len(), 6);
}

#[test]
fn test_first_page_holds_five_articles() {
    let home = TempDir::new().unwrap();
    let json = feed_json(glad(home.path()).args(["feed", "--offline", "--json"]));

    assert_eq!(json["page"], 1);
    assert_eq!(json["has_more"], true);
    assert_eq!(scores(&json).len(), 5);
}

#[test]
fn test_min_score_filters_builtin_articles() {
    let home = TempDir::new().unwrap();
    let json = feed_json(glad(home.path()).args([
        "feed",
        "--offline",
        "--min-score",
        "0.86",
        "--json",
    ]));

    assert_eq!(scores(&json), vec![0.92, 0.87, 0.89]);
}

#[test]
fn test_local_document_is_used_before_builtin() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("articles.json");
    fs::write(&path, LOCAL_DOCUMENT).unwrap();

    let json = feed_json(
        glad(home.path())
            .args(["feed", "--offline", "--json", "--local-file"])
            .arg(&path),
    );

    assert_eq!(json["source"], "mock JSON");
    assert_eq!(json["total"], 2);
    assert_eq!(json["articles"][0]["title"], "Ny cykelbana i Lund");
}

#[test]
fn test_unreachable_api_falls_back_to_local_document() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("articles.json");
    fs::write(&path, LOCAL_DOCUMENT).unwrap();

    let json = feed_json(
        glad(home.path())
            .args(["feed", "--json", "--api-url", "http://127.0.0.1:9/api/newsarticles"])
            .arg("--local-file")
            .arg(&path),
    );

    assert_eq!(json["source"], "mock JSON");
}

#[test]
fn test_region_and_topic_filters() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("articles.json");
    fs::write(&path, LOCAL_DOCUMENT).unwrap();

    let json = feed_json(
        glad(home.path())
            .args(["feed", "--offline", "--json", "--region", "Dalarna", "--topic", "Ekonomi"])
            .arg("--local-file")
            .arg(&path),
    );

    assert_eq!(json["matched"], 1);
    assert_eq!(json["articles"][0]["id"], 102);
}

#[test]
fn test_no_match_prints_empty_state() {
    let home = TempDir::new().unwrap();
    glad(home.path())
        .args(["feed", "--offline", "--source", "Aftonbladet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inga artiklar matchar dina filter"));
}

#[test]
fn test_cards_show_badge_and_swedish_date() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("articles.json");
    fs::write(&path, LOCAL_DOCUMENT).unwrap();

    glad(home.path())
        .args(["feed", "--offline", "--local-file"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("+88%"))
        .stdout(predicate::str::contains("2 apr. 08:15"))
        .stdout(predicate::str::contains("Inga fler artiklar att visa"));
}

#[test]
fn test_min_score_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    glad(home.path())
        .args(["feed", "--offline", "--min-score", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--min-score"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    fs::write(&config, "page_size = 0\n").unwrap();

    glad(home.path())
        .args(["feed", "--offline", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_topics_lists_vocabulary() {
    let home = TempDir::new().unwrap();
    let output = glad(home.path())
        .args(["topics", "--offline", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 9);
    assert_eq!(names[0], "Miljö");
}

#[test]
fn test_regions_table() {
    let home = TempDir::new().unwrap();
    glad(home.path())
        .args(["regions", "--top", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uppland"))
        .stdout(predicate::str::contains("Halland"))
        .stdout(predicate::str::contains("Skåne").not());
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn watchlog_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("watchlog").unwrap();
    cmd.env("WATCHLOG_DATA_DIR", data_dir);
    cmd
}

#[test]
fn test_empty_list() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No media in the database"));
}

#[test]
fn test_add_rate_watch_search_workflow() {
    let temp = TempDir::new().unwrap();

    // 1. Add Inception
    watchlog_cmd(temp.path())
        .args(["add", "Inception", "--type", "movie", "--platform", "Netflix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Inception to the database"));

    // 2. List shows it, unwatched and unrated
    watchlog_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inception"))
        .stdout(predicate::str::contains("not rated"));

    // 3. Rate it
    watchlog_cmd(temp.path())
        .args(["rate", "Inception", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rated Inception with 9 stars."));

    // 4. Mark as watched with an explicit date
    watchlog_cmd(temp.path())
        .args(["watch", "Inception", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked Inception as watched."));

    // 5. Search shows the updated record
    watchlog_cmd(temp.path())
        .args(["search", "Inception"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Inception"))
        .stdout(predicate::str::contains("Watched: Yes"))
        .stdout(predicate::str::contains("Watch Date: 2024-05-01"))
        .stdout(predicate::str::contains("Rating: 9"));

    // 6. Rating an unknown title is a no-op with a not-found outcome
    watchlog_cmd(temp.path())
        .args(["rate", "Unknown", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Media not found."));
}

#[test]
fn test_database_file_uses_legacy_keys() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .args([
            "add", "Dark", "--type", "tv", "--platform", "Netflix", "--rating", "8",
        ])
        .assert()
        .success();

    let db_path = temp.path().join("media_database.json");
    let content = fs::read_to_string(&db_path).unwrap();
    let records: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(records[0]["Title"], "Dark");
    assert_eq!(records[0]["Type"], "TV Show");
    assert_eq!(records[0]["Platform"], "Netflix");
    assert_eq!(records[0]["Watched"], false);
    assert_eq!(records[0]["Rating"], "8");
    assert!(records[0]["WatchDate"].is_null());
}

#[test]
fn test_database_flag_overrides_location() {
    let temp = TempDir::new().unwrap();
    let db_path = temp.path().join("elsewhere").join("movies.json");

    watchlog_cmd(temp.path())
        .args(["add", "Alien", "--type", "movie", "--platform", "Hulu"])
        .arg("--database")
        .arg(&db_path)
        .assert()
        .success();

    assert!(db_path.exists());
    assert!(!temp.path().join("media_database.json").exists());
}

#[test]
fn test_blank_platform_is_rejected() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .args(["add", "Alien", "--type", "movie", "--platform", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Platform cannot be empty"));

    assert!(!temp.path().join("media_database.json").exists());
}

#[test]
fn test_out_of_range_rating_is_rejected_by_clap() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .args(["rate", "Alien", "11"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_platform_prints_a_hint() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .args(["add", "Alien", "--type", "movie", "--platform", "Netflux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in your platforms list"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .args(["config", "data-file", "movies.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data-file set to movies.json"));

    watchlog_cmd(temp.path())
        .args(["config", "data-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("movies.json"));

    // New database name takes effect
    watchlog_cmd(temp.path())
        .args(["add", "Alien", "--type", "movie", "--platform", "Hulu"])
        .assert()
        .success();
    assert!(temp.path().join("movies.json").exists());
}

#[test]
fn test_default_command_is_list() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No media in the database"));
}

#[test]
fn test_duplicate_titles_resolve_to_first_insertion() {
    let temp = TempDir::new().unwrap();

    watchlog_cmd(temp.path())
        .args(["add", "Dune", "--type", "movie", "--platform", "HBO"])
        .assert()
        .success();
    watchlog_cmd(temp.path())
        .args(["add", "Dune", "--type", "movie", "--platform", "Netflix"])
        .assert()
        .success();

    watchlog_cmd(temp.path())
        .args(["search", "Dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform: HBO"));
}

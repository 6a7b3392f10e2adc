use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".producthq").join("config.json")
}

const BINARY_NAME: &str = "producthq";

/// Command with `HOME` pointed at `home`, so no real config file is read.
fn producthq(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Product HQ terminal dashboard"))
        .stdout(contains("snapshot"));
}

#[test]
fn snapshot_prints_first_page_by_default() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--seed", "1"])
        .assert()
        .success()
        .stdout(contains("Page 1 of 20"))
        .stdout(contains("Project 10"))
        .stdout(contains("Project 11").not())
        .stdout(contains("Wisdom & Quotes"));
}

#[test]
fn snapshot_last_page() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--seed", "1", "--page", "20"])
        .assert()
        .success()
        .stdout(contains("Page 20 of 20"))
        .stdout(contains("Project 191"))
        .stdout(contains("Project 200"));
}

#[test]
/// Pages past the end are clamped to the last page.
fn snapshot_clamps_page() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--page", "99"])
        .assert()
        .success()
        .stdout(contains("Page 20 of 20"));
}

#[test]
fn snapshot_with_no_rows_has_one_page() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--rows", "0"])
        .assert()
        .success()
        .stdout(contains("Page 1 of 1"))
        .stdout(contains("Project 1").not());
}

#[test]
fn snapshot_rejects_zero_page_size() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--page-size", "0"])
        .assert()
        .failure()
        .stdout(contains("page size must be at least 1"));
}

#[test]
fn snapshot_json_output() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--rows", "25", "--page", "3", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total_pages\": 3"))
        .stdout(contains("\"name\": \"Project 25\""));
}

#[test]
/// The default config file is read from ~/.producthq/config.json.
fn snapshot_reads_default_config_file() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"page_size": 25}"#).unwrap();

    producthq(&home)
        .arg("snapshot")
        .assert()
        .success()
        .stdout(contains("Page 1 of 8"));
}

#[test]
/// Command-line flags win over the config file.
fn flags_override_config_file() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, r#"{"page_size": 25, "rows": 50}"#).unwrap();

    producthq(&home)
        .args(["snapshot", "--page-size", "10"])
        .assert()
        .success()
        .stdout(contains("Page 1 of 5"));
}

#[test]
fn explicit_missing_config_file_fails() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["snapshot", "--config"])
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .stdout(contains("Invalid configuration"));
}

#[test]
fn start_rejects_short_quote_interval() {
    let home = temp_home_dir();
    producthq(&home)
        .args(["start", "--headless", "--quote-interval-ms", "50"])
        .assert()
        .failure()
        .stdout(contains("quote interval must be at least 100ms"));
}

#[test]
/// Headless mode prints each rotation and exits after the requested count.
fn headless_prints_quote_rotations() {
    let home = temp_home_dir();
    producthq(&home)
        .args([
            "start",
            "--headless",
            "--seed",
            "4",
            "--quote-interval-ms",
            "100",
            "--max-rotations",
            "2",
        ])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(contains("Page 1 of 20"))
        .stdout(contains("Quote 1/3"))
        .stdout(contains("Quote 2/3: “Simplicity is the ultimate sophistication.” — Leonardo da Vinci"))
        .stdout(contains("Quote 3/3"))
        .stdout(contains("Product HQ exited successfully"));
}

#[test]
/// A limit of zero rotations exits before the first quote changes.
fn headless_zero_rotations_exits_immediately() {
    let home = temp_home_dir();
    producthq(&home)
        .args([
            "start",
            "--headless",
            "--quote-interval-ms",
            "100",
            "--max-rotations",
            "0",
        ])
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(contains("Quote 1/3"))
        .stdout(contains("Quote 2/3").not())
        .stdout(contains("Product HQ exited successfully"));
}

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    assert!(!config_path.exists());

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_url = \"http://127.0.0.1:8000\""));
    assert!(contents.contains("# Request timeout in seconds"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_url_keeps_comments() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["config", "set-url", "http://maia.local:9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://maia.local:9000"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("api_url = \"http://maia.local:9000\""));
    assert!(contents.contains("# Base URL of the Maia backend."));
}

#[test]
fn test_config_set_url_rejects_invalid_url() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["config", "set-url", "ftp://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid backend URL"));

    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_broken_config_is_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "api_url = [").unwrap();

    cargo_bin_cmd!("maia")
        .env("MAIA_HOME", dir.path())
        .args(["sessions", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}

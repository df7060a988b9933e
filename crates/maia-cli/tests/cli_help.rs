use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("maia")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("sessions"))
        .stdout(predicate::str::contains("history"))
        .stdout(predicate::str::contains("send"))
        .stdout(predicate::str::contains("legacy"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_sessions_help_shows_subcommands() {
    cargo_bin_cmd!("maia")
        .args(["sessions", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_send_requires_session_and_prompt() {
    cargo_bin_cmd!("maia")
        .args(["send", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROMPT"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("maia")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

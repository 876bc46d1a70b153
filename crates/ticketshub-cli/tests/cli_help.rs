use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("ticketshub")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("whoami"))
        .stdout(predicate::str::contains("users"))
        .stdout(predicate::str::contains("notifications"));
}

#[test]
fn test_users_help_shows_subcommands() {
    cargo_bin_cmd!("ticketshub")
        .args(["users", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_unknown_role_is_rejected() {
    cargo_bin_cmd!("ticketshub")
        .args(["users", "list", "--role", "wizard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wizard"));
}

#[test]
fn test_tui_refuses_to_start_without_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("ticketshub")
        .env("TICKETSHUB_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}

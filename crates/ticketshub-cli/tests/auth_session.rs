use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

fn ticketshub(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ticketshub");
    cmd.env("TICKETSHUB_HOME", home.path())
        .env_remove("TICKETSHUB_PASSWORD");
    cmd
}

#[test]
fn test_login_persists_session_until_logout() {
    let home = tempdir().unwrap();

    ticketshub(&home)
        .args([
            "login",
            "--email",
            "admin@management.ticketshub.com",
            "--password",
            "admin123",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as"))
        .stdout(predicate::str::contains("Admin"));

    let session = std::fs::read_to_string(home.path().join("session.json")).unwrap();
    assert!(!session.contains("admin123"));

    ticketshub(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("admin@management.ticketshub.com"));

    ticketshub(&home)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    ticketshub(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in."));
    assert!(!home.path().join("session.json").exists());
}

#[test]
fn test_wrong_password_shows_generic_message() {
    let home = tempdir().unwrap();

    ticketshub(&home)
        .args([
            "login",
            "--email",
            "vendor@management.ticketshub.com",
            "--password",
            "wrongpass",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid credentials or account not verified",
        ));

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn test_demo_login_signs_in_role_account() {
    let home = tempdir().unwrap();

    ticketshub(&home)
        .args(["login", "--demo", "speaker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speaker@management.ticketshub.com"));
}

#[test]
fn test_no_persist_keeps_session_off_disk() {
    let home = tempdir().unwrap();

    ticketshub(&home)
        .args(["--no-persist", "login", "--demo", "organizer"])
        .assert()
        .success();

    assert!(!home.path().join("session.json").exists());
}

#[test]
fn test_login_without_credentials_fails() {
    let home = tempdir().unwrap();

    ticketshub(&home)
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--demo"));
}

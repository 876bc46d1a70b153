use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn ticketshub(args: &[&str]) -> assert_cmd::assert::Assert {
    let home = tempdir().unwrap();
    cargo_bin_cmd!("ticketshub")
        .env("TICKETSHUB_HOME", home.path())
        .args(args)
        .assert()
}

#[test]
fn test_users_list_filters_by_role() {
    ticketshub(&["users", "list", "--role", "organizer"])
        .success()
        .stdout(predicate::str::contains("org-1"))
        .stdout(predicate::str::contains("vnd-1").not());
}

#[test]
fn test_users_show_omits_password() {
    ticketshub(&["users", "show", "org-1"])
        .success()
        .stdout(predicate::str::contains("EventPro Productions"))
        .stdout(predicate::str::contains("password").not());
}

#[test]
fn test_users_show_unknown_id_fails() {
    ticketshub(&["users", "show", "nonexistent"])
        .failure()
        .stderr(predicate::str::contains("user 'nonexistent' not found"));
}

#[test]
fn test_events_list_by_organizer() {
    ticketshub(&["events", "list", "--organizer", "org-2"])
        .success()
        .stdout(predicate::str::contains("evt-3"))
        .stdout(predicate::str::contains("evt-1").not());
}

#[test]
fn test_events_show_lists_partner_types() {
    ticketshub(&["events", "show", "evt-1"])
        .success()
        .stdout(predicate::str::contains("vendor"))
        .stdout(predicate::str::contains("sponsor"));
}

#[test]
fn test_notifications_report_unread_count() {
    ticketshub(&["notifications", "org-1"])
        .success()
        .stdout(predicate::str::contains("unread"));
}

#[test]
fn test_connections_for_unknown_user_fails() {
    ticketshub(&["connections", "ghost"])
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_store_check_passes_on_seed_data() {
    ticketshub(&["store", "check"])
        .success()
        .stdout(predicate::str::contains("Store OK"));
}

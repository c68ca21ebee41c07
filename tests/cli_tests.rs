mod common;

use common::{UNREACHABLE_API, rsv, seed_session, setup_test_db, temp_out};
use predicates::str::contains;

#[test]
fn test_open_public_route_without_session() {
    let db_path = setup_test_db("cli_open_public");

    rsv("cli_open_public")
        .args(["--db", &db_path, "open", "/rating/12"])
        .assert()
        .success()
        .stdout(contains("/rating/12"));
}

#[test]
fn test_open_guarded_route_redirects_to_login() {
    let db_path = setup_test_db("cli_open_login");

    rsv("cli_open_login")
        .args(["--db", &db_path, "open", "/backlog"])
        .assert()
        .success()
        .stdout(contains("Redirected from /backlog to /"));
}

#[test]
fn test_open_home_as_admin_lands_on_backlog() {
    let db_path = setup_test_db("cli_open_admin");
    seed_session(&db_path, "tok", Some("1"), true);

    rsv("cli_open_admin")
        .args(["--db", &db_path, "open", "/home"])
        .assert()
        .success()
        .stdout(contains("Redirected from /home to /backlog"));
}

#[test]
fn test_open_rejects_unknown_route() {
    let db_path = setup_test_db("cli_open_bad");

    rsv("cli_open_bad")
        .args(["--db", &db_path, "open", "/rating/abc"])
        .assert()
        .failure()
        .stderr(contains("Invalid route"));
}

#[test]
fn test_backlog_with_unreachable_backend_shows_empty_state() {
    let db_path = setup_test_db("cli_backlog_down");
    seed_session(&db_path, "tok", Some("1"), true);

    rsv("cli_backlog_down")
        .args(["--db", &db_path, "--api-url", UNREACHABLE_API, "backlog"])
        .assert()
        .success()
        .stdout(contains("No tickets found."))
        .stderr(contains("error fetching services"));
}

#[test]
fn test_backlog_denied_for_attendant() {
    let db_path = setup_test_db("cli_backlog_denied");
    seed_session(&db_path, "tok", Some("7"), false);

    rsv("cli_backlog_denied")
        .args(["--db", &db_path, "--api-url", UNREACHABLE_API, "backlog"])
        .assert()
        .failure()
        .stderr(contains("Access denied: redirected to /home"));
}

#[test]
fn test_backlog_rejects_page_size() {
    let db_path = setup_test_db("cli_backlog_size");
    seed_session(&db_path, "tok", Some("1"), true);

    rsv("cli_backlog_size")
        .args(["--db", &db_path, "backlog", "--page-size", "7"])
        .assert()
        .failure()
        .stderr(contains("Invalid page size 7"));
}

#[test]
fn test_ticket_requires_login() {
    let db_path = setup_test_db("cli_ticket_nologin");

    rsv("cli_ticket_nologin")
        .args([
            "--db",
            &db_path,
            "--api-url",
            UNREACHABLE_API,
            "ticket",
            "--type",
            "Suporte",
            "--register",
            "R-1",
        ])
        .assert()
        .failure()
        .stderr(contains("Not logged in"));
}

#[test]
fn test_rate_without_answers_and_no_input_fails_validation() {
    let db_path = setup_test_db("cli_rate_missing");

    rsv("cli_rate_missing")
        .args([
            "--db",
            &db_path,
            "--api-url",
            UNREACHABLE_API,
            "rate",
            "3",
            "--atendimento",
            "neutro",
            "--no-input",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid form"))
        .stderr(contains("postura"));
}

#[test]
fn test_rate_rejects_unknown_answer() {
    let db_path = setup_test_db("cli_rate_value");

    rsv("cli_rate_value")
        .args(["--db", &db_path, "rate", "3", "--tempo", "otimo"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_export_with_nothing_to_export_succeeds_without_file() {
    let db_path = setup_test_db("cli_export_empty");
    seed_session(&db_path, "tok", Some("1"), true);
    let out = temp_out("cli_export_empty", "pdf");

    rsv("cli_export_empty")
        .args([
            "--db",
            &db_path,
            "--api-url",
            UNREACHABLE_API,
            "export",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_logout_then_log_print() {
    let db_path = setup_test_db("cli_logout");
    seed_session(&db_path, "tok", Some("1"), false);

    rsv("cli_logout")
        .args(["--db", &db_path, "logout"])
        .assert()
        .success();

    rsv("cli_logout")
        .args(["--db", &db_path, "open", "/home"])
        .assert()
        .success()
        .stdout(contains("Redirected from /home to /"));

    rsv("cli_logout")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("logout"));
}

#[test]
fn test_config_print_shows_effective_values() {
    rsv("cli_config")
        .args(["--api-url", "http://example.test:8080", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("http://example.test:8080"))
        .stdout(contains("page_size: 10"));
}

#[test]
fn test_empty_api_url_flag_is_rejected() {
    let db_path = setup_test_db("cli_empty_url");

    rsv("cli_empty_url")
        .args(["--db", &db_path, "--api-url", "", "open", "/"])
        .assert()
        .failure()
        .stderr(contains("api_url must not be empty"));
}

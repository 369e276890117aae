use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

/// Nothing listens here; connecting fails immediately.
const DEAD_SERVER: &str = "http://127.0.0.1:9";

fn kanban() -> Command {
    let mut cmd = Command::cargo_bin("kanban").unwrap();
    cmd.env_remove("KANBAN_API_URL")
        .env_remove("KANBAN_TOKEN")
        .env_remove("KANBAN_PASSWORD")
        .env_remove("KANBAN_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn error_message(output: &[u8]) -> String {
    let json = parse_json_output(output);
    assert_eq!(json["success"], false);
    json["error"].as_str().unwrap().to_string()
}

mod help_tests {
    use super::*;

    #[test]
    fn test_help_lists_commands() {
        kanban()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("login"))
            .stdout(predicate::str::contains("board"))
            .stdout(predicate::str::contains("card"));
    }

    #[test]
    fn test_card_move_help_shows_targets() {
        kanban()
            .args(["card", "move", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--to-list"))
            .stdout(predicate::str::contains("--before-card"));
    }

    #[test]
    fn test_card_move_needs_a_target() {
        kanban()
            .args(["card", "move", "--board-id", "1", "--id", "2"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));
    }

    #[test]
    fn test_version() {
        kanban()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_completions() {
        kanban()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("kanban"));
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_board_list_without_token() {
        let output = kanban()
            .args(["--api-url", DEAD_SERVER, "board", "list"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).contains("No session token"));
    }

    #[test]
    fn test_login_validates_before_connecting() {
        let output = kanban()
            .args([
                "--api-url",
                DEAD_SERVER,
                "login",
                "--email",
                "not-an-email",
                "--password",
                "secret",
            ])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).contains("valid email"));
    }

    #[test]
    fn test_register_rejects_short_password() {
        let output = kanban()
            .args([
                "--api-url",
                DEAD_SERVER,
                "register",
                "--email",
                "ana@example.com",
                "--password",
                "short",
            ])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).contains("at least 8"));
    }

    #[test]
    fn test_unreachable_server_reports_network_error() {
        let output = kanban()
            .env("KANBAN_TOKEN", "tok")
            .args(["--api-url", DEAD_SERVER, "board", "show", "--id", "1"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).starts_with("Network error"));
    }

    #[test]
    fn test_failed_board_list_keeps_stderr_parseable() {
        let output = kanban()
            .env_remove("RUST_LOG")
            .args(["--token", "tok", "--api-url", DEAD_SERVER, "board", "list"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).starts_with("Network error"));
    }

    #[test]
    fn test_invalid_api_url() {
        let output = kanban()
            .env("KANBAN_TOKEN", "tok")
            .args(["--api-url", "not a url", "board", "list"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).starts_with("Configuration error"));
    }
}

mod logging_tests {
    use super::*;

    #[test]
    fn test_debug_log_file_is_written() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("kanban.log");

        kanban()
            .env("KANBAN_DEBUG_LOG", &log)
            .args(["--api-url", DEAD_SERVER, "board", "list"])
            .assert()
            .failure();

        let contents = fs::read_to_string(&log).unwrap();
        assert!(contents.contains("DEBUG"));
    }

    #[test]
    fn test_unwritable_debug_log_reports_io_error() {
        let dir = tempdir().unwrap();

        let output = kanban()
            .env("KANBAN_DEBUG_LOG", dir.path())
            .args(["--api-url", DEAD_SERVER, "board", "list"])
            .assert()
            .failure()
            .code(1)
            .get_output()
            .stderr
            .clone();

        assert!(error_message(&output).starts_with("IO error"));
    }
}

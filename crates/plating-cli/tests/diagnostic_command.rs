use assert_cmd::Command;
use plating_cli::EXIT_INVALID_COMMAND_LINE;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_plating_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("chromium-plating")
}

/// Exit status as observed by the parent; Unix keeps only the low byte
fn invalid_command_line_code() -> i32 {
    if cfg!(unix) {
        EXIT_INVALID_COMMAND_LINE & 0xff
    } else {
        EXIT_INVALID_COMMAND_LINE
    }
}

fn write_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("config.json");
    let config = serde_json::json!({
        "browser": {
            "filename": "/usr/bin/chromium",
            "profileDirectory": "/home/me/.config/chromium",
            "profiles": ["work", "personal"]
        },
        "urls": [
            {"pattern": "github\\.com", "profile": "work"},
            {"pattern": ".*", "profile": "personal"}
        ]
    });
    std::fs::write(&path, config.to_string()).unwrap();
    path
}

#[test]
fn test_no_arguments_dumps_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir);

    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--config").arg(&config);

    cmd.assert()
        .code(invalid_command_line_code())
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("<URL>"))
        .stdout(predicate::str::contains(format!(
            "Configuration file: {}",
            config.display()
        )))
        .stdout(predicate::str::contains("2 profiles whitelisted:"))
        .stdout(predicate::str::contains("  * work\n  * personal\n"))
        .stdout(predicate::str::contains("2 URL patterns configured:"))
        .stdout(predicate::str::contains("  * github\\.com => work"))
        .stdout(predicate::str::contains("  * .* => personal"));
}

#[test]
fn test_two_arguments_dumps_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(&dir);

    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--config")
        .arg(&config)
        .arg("https://github.com")
        .arg("https://example.com");

    cmd.assert()
        .code(invalid_command_line_code())
        .stderr(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("2 URL patterns configured:"));
}

#[test]
fn test_missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--config")
        .arg(dir.path().join("missing.json"))
        .env_remove("RUST_LOG");

    cmd.assert()
        .code(invalid_command_line_code())
        .stderr(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("(not found, using defaults)"))
        .stdout(predicate::str::contains("1 profiles whitelisted:\n  * Default\n"))
        .stdout(predicate::str::contains("0 URL patterns configured:"));
}

#[cfg(unix)]
#[test]
fn test_default_location_under_home() {
    let home = tempfile::tempdir().unwrap();
    let expected = home.path().join(".chromiumplating").join("config.json");

    let mut cmd = Command::new(get_plating_bin());
    cmd.env("HOME", home.path())
        .env_remove("CHROMIUM_PLATING_CONFIG");

    cmd.assert()
        .code(invalid_command_line_code())
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_malformed_config_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--config").arg(&path).arg("https://example.com");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_help() {
    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("[URL]"));
}

#[test]
fn test_verbose_logs_debug() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--config")
        .arg(dir.path().join("missing.json"))
        .arg("--verbose")
        .env_remove("RUST_LOG");

    cmd.assert()
        .code(invalid_command_line_code())
        .stderr(predicate::str::contains("DEBUG"));
}

#[test]
fn test_rust_log_overrides_verbose() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::new(get_plating_bin());
    cmd.arg("--config")
        .arg(dir.path().join("missing.json"))
        .arg("--verbose")
        .env("RUST_LOG", "off");

    cmd.assert()
        .code(invalid_command_line_code())
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("WARN").not());
}

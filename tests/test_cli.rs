//! Tests for CLI argument parsing and the binary's non-interactive surface

use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use filedeck::app::AppConfig;
use filedeck::cli::{Cli, LogLevel};
use predicates::prelude::*;
use simplelog::LevelFilter;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["filedeck"]);

    assert_eq!(cli.dir, None, "Default directory comes from the process");
    assert_eq!(cli.soffice, PathBuf::from("soffice"));
    assert!(!cli.no_clear, "Screen clearing is on by default");
    assert_eq!(cli.log_file, None);
    assert_eq!(cli.log_level, LogLevel::Info);
}

#[test]
fn test_cli_custom_values() {
    let cli = Cli::parse_from([
        "filedeck",
        "-d",
        "/tmp",
        "--soffice",
        "/opt/office/soffice",
        "--no-clear",
        "--log-file",
        "run.log",
        "--log-level",
        "debug",
    ]);

    assert_eq!(cli.dir, Some(PathBuf::from("/tmp")));
    assert_eq!(cli.soffice, PathBuf::from("/opt/office/soffice"));
    assert!(cli.no_clear);
    assert_eq!(cli.log_path(), PathBuf::from("run.log"));
    assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
}

#[test]
fn test_cli_rejects_unknown_log_level() {
    assert!(Cli::try_parse_from(["filedeck", "--log-level", "loud"]).is_err());
}

#[test]
fn test_default_log_path_is_named_after_the_tool() {
    let cli = Cli::parse_from(["filedeck"]);
    assert!(cli.log_path().ends_with("filedeck.log"));
}

#[test]
fn test_config_from_cli() {
    let cli = Cli::parse_from(["filedeck", "--dir", "/srv", "--no-clear"]);
    let config = AppConfig::from_cli(&cli).unwrap();

    assert_eq!(config.start_dir, PathBuf::from("/srv"));
    assert!(!config.clear_screen);
    assert_eq!(config.soffice, PathBuf::from("soffice"));
}

#[test]
fn test_binary_help_lists_options() {
    Command::cargo_bin("filedeck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--soffice"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_binary_version() {
    Command::cargo_bin("filedeck")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_binary_rejects_missing_start_directory() {
    let temp = tempfile::TempDir::new().unwrap();
    Command::cargo_bin("filedeck")
        .unwrap()
        .arg("--dir")
        .arg(temp.path().join("missing"))
        .arg("--log-level")
        .arg("off")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open directory"));
}

//! Tests for loading settings files.

use std::io::Write;
use std::path::{Path, PathBuf};
use time_travel_tictactoe::Settings;

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.log_file(), Path::new("time_travel_tictactoe.log"));
    assert_eq!(settings.log_filter(), "info");
    assert!(*settings.mouse());
    assert!(*settings.show_coordinates());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"game.log\"\nlog_filter = \"debug\"\nshow_coordinates = false"
    )
    .unwrap();

    let settings = Settings::load(Some(file.path())).unwrap();

    assert_eq!(settings.log_file(), &PathBuf::from("game.log"));
    assert_eq!(settings.log_filter(), "debug");
    assert!(!*settings.show_coordinates());
    assert!(*settings.mouse());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mouse = maybe").unwrap();

    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_log_file_override() {
    let settings = Settings::default().with_log_file("other.log");
    assert_eq!(settings.log_file(), Path::new("other.log"));
}

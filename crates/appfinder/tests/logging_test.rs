//! Tests for log stream setup.
//!
//! The global subscriber can be installed once per process, so only one
//! test here calls `init_logging`.

use appfinder::{LoggingConfig, init_logging, open_log_file};

#[test]
fn test_logs_are_appended_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appfinder.log");
    std::fs::write(&path, "existing line\n").unwrap();

    init_logging(&LoggingConfig::new(&path)).unwrap();
    tracing::error!(chat_id = 42, "log stream check");

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("existing line\n"));
    assert!(contents.contains("log stream check"));
    assert!(contents.contains("chat_id=42"));

    // A second subscriber is refused.
    assert!(init_logging(&LoggingConfig::new(&path)).is_err());
}

#[test]
fn test_unwritable_destination_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("appfinder.log");

    let err = open_log_file(&path).unwrap_err();
    assert!(err.message.contains("Cannot open log file"));
}

//! Tests for loading settings from files.

use appfinder::{AppFinderConfig, DEFAULT_LOOKUP_URL};
use std::io::Write;

#[test]
fn test_load_from_explicit_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
[catalog]
search_url = "http://127.0.0.1:8080/search"
timeout_secs = 2

[cache]
ttl_secs = 60
"#
    )
    .unwrap();

    let config = AppFinderConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.catalog.search_url(), "http://127.0.0.1:8080/search");
    assert_eq!(config.catalog.lookup_url(), DEFAULT_LOOKUP_URL);
    assert_eq!(*config.catalog.timeout_secs(), 2);
    assert_eq!(config.cache.key_prefix(), "app_info");
    assert_eq!(*config.cache.ttl_secs(), 60);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    assert!(AppFinderConfig::load(Some(&missing)).is_err());
}

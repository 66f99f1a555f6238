//! Tests for loading console settings from TOML.

use rewind::{Highlight, Settings};
use std::io::Write;
use std::path::Path;

fn write_settings(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write settings");
    file
}

#[test]
fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(*settings.highlight(), Highlight::Bold);
    assert!(*settings.show_indices());
    assert_eq!(settings.log_filter(), "warn");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_settings("highlight = \"marker\"\n");
    let settings = Settings::from_file(file.path()).expect("valid settings");

    assert_eq!(*settings.highlight(), Highlight::Marker);
    assert!(*settings.show_indices());
    assert_eq!(settings.log_filter(), "warn");
}

#[test]
fn test_full_file() {
    let file = write_settings(
        "highlight = \"bold\"\nshow_indices = false\nlog_filter = \"rewind=debug\"\n",
    );
    let settings = Settings::from_file(file.path()).expect("valid settings");

    assert!(!*settings.show_indices());
    assert_eq!(settings.log_filter(), "rewind=debug");
}

#[test]
fn test_invalid_file_reports_parse_error() {
    let file = write_settings("highlight = \"italic\"\n");
    let err = Settings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse settings"));
}

#[test]
fn test_resolve_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("rewind.toml");

    let settings = Settings::resolve(None, &missing).expect("defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_resolve_requires_explicit_file() {
    let err = Settings::resolve(Some(Path::new("/nonexistent/rewind.toml")), Path::new("unused"))
        .unwrap_err();
    assert!(err.message.contains("Failed to read settings file"));
}

#[test]
fn test_resolve_uses_default_path_when_present() {
    let file = write_settings("show_indices = false\n");
    let settings = Settings::resolve(None, file.path()).expect("valid settings");
    assert!(!*settings.show_indices());
}

// tests/config_test.rs
use std::fs;
use std::path::Path;

use tempfile::TempDir;
use verbump::config::{load_settings, Settings, SETTINGS_FILE};

#[test]
fn test_load_from_explicit_file() {
    let settings = load_settings(Some(Path::new("tests/fixtures/verbump.toml")), Path::new("."))
        .expect("Failed to load test settings");

    assert_eq!(settings.metadata.file, "manifest.json");
    assert_eq!(settings.metadata.section, "release");
    assert!(!settings.behavior.push);
    assert!(settings.behavior.commit);
    assert_eq!(settings.behavior.remote, "upstream");
    assert_eq!(settings.tag_pattern().unwrap().format("2.0.0"), "release-2.0.0");
}

#[test]
fn test_load_from_project_root() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(SETTINGS_FILE), "[behavior]\ntag = false\n").unwrap();

    let settings = load_settings(None, dir.path()).unwrap();
    assert!(!settings.behavior.tag);
    assert_eq!(
        settings.metadata_path(dir.path()),
        dir.path().join("package.json")
    );
}

#[test]
fn test_explicit_path_must_exist() {
    let dir = TempDir::new().unwrap();
    let err = load_settings(Some(&dir.path().join("nope.toml")), dir.path()).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn test_malformed_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[behavior\ncommit = yes").unwrap();

    let err = load_settings(Some(&path), dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_default_values() {
    let settings = Settings::default();
    assert_eq!(settings.metadata.file, "package.json");
    assert!(settings.behavior.commit);
    assert!(settings.behavior.push);
    assert!(settings.behavior.tag);
}

// tests/cli_test.rs
use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn verbump() -> Command {
    Command::cargo_bin("verbump").expect("binary is built")
}

fn project(package: &str) -> TempDir {
    let dir = TempDir::new().expect("Could not create temp dir");
    fs::write(dir.path().join("package.json"), package).unwrap();
    // Keep a user-level settings file from leaking into the tests.
    fs::write(dir.path().join("verbump.toml"), "").unwrap();
    dir
}

#[test]
fn test_help() {
    let output = verbump().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Updates the project version"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_version_flag() {
    let output = verbump().arg("-v").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout)
        .unwrap()
        .starts_with("verbump "));
}

#[test]
fn test_bump_without_commit() {
    let dir = project(r#"{"name":"demo","version":"1.2.3"}"#);

    let output = verbump()
        .current_dir(dir.path())
        .args(["alpha", "major", "--no-commit"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("2.0.0-alpha.0"));
    assert!(fs::read_to_string(dir.path().join("package.json"))
        .unwrap()
        .contains("\"version\": \"2.0.0-alpha.0\""));
}

#[test]
fn test_dry_run_leaves_files_alone() {
    let package = r#"{"version":"1.2.3"}"#;
    let dir = project(package);

    let output = verbump()
        .args(["-C", dir.path().to_str().unwrap(), "minor", "--dry-run"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Dry run"));
    assert!(stdout.contains("Bump version 1.2.3 → 1.3.0"));
    assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), package);
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let dir = project(r#"{"version":"1.2.3"}"#);

    let output = verbump()
        .current_dir(dir.path())
        .args(["--quiet", "--no-commit", "--force", "4.0.0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_metadata_exits_1() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("verbump.toml"), "").unwrap();

    verbump().current_dir(dir.path()).assert().code(1);
}

#[test]
fn test_malformed_metadata_exits_2() {
    let dir = project("{ not json");
    verbump().current_dir(dir.path()).assert().code(2);
}

#[test]
fn test_second_init_exits_3() {
    let dir = project(r#"{"version":"1.2.3"}"#);

    verbump().current_dir(dir.path()).arg("--init").assert().success();
    verbump().current_dir(dir.path()).arg("--init").assert().code(3);
}

#[test]
fn test_invalid_transition_exits_1() {
    let package = r#"{"version":"1.2.3-rc.1"}"#;
    let dir = project(package);

    let output = verbump()
        .current_dir(dir.path())
        .args(["beta", "--no-commit"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("I don't support going from rc to beta"));
    assert_eq!(fs::read_to_string(dir.path().join("package.json")).unwrap(), package);
}

#[test]
fn test_rejects_unknown_reason() {
    let dir = project(r#"{"version":"1.2.3"}"#);
    verbump().current_dir(dir.path()).arg("hotfix").assert().failure();
}

// tests/git_integration_test.rs
use std::fs;
use std::path::Path;

use git2::Repository;
use tempfile::TempDir;
use verbump::cli::orchestration::{run, BumpSummary, RunArgs, RunOutcome};
use verbump::config::Settings;
use verbump::domain::BumpReason;
use verbump::ui::Reporter;
use verbump::vcs::VcsStep;
use verbump::warning::RunWarning;

/// Creates a repository holding one initial commit of `package.json`
fn setup_project(package: &str) -> (TempDir, Repository) {
    let dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }

    fs::write(dir.path().join("package.json"), package).unwrap();
    {
        let mut index = repo.index().unwrap();
        index.add_path(Path::new("package.json")).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let sig = repo.signature().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
            .unwrap();
    }

    (dir, repo)
}

fn no_push() -> Settings {
    let mut settings = Settings::default();
    settings.behavior.push = false;
    settings
}

fn bump(dir: &TempDir, reason: BumpReason, settings: &Settings) -> BumpSummary {
    let args = RunArgs {
        root: dir.path().to_path_buf(),
        reason,
        ..RunArgs::default()
    };
    match run(&args, settings, &Reporter::quiet()).expect("run failed") {
        RunOutcome::Bumped(summary) => summary,
        other => panic!("expected a bump, got {:?}", other),
    }
}

fn head_message(repo: &Repository) -> String {
    repo.head()
        .unwrap()
        .peel_to_commit()
        .unwrap()
        .message()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_bump_commits_and_tags() {
    let (dir, repo) = setup_project(
        r#"{"name":"demo","version":"1.2.3","verbump":{"targets":[
            {"file":"VERSION","search":"{{version}}"}
        ]}}"#,
    );
    fs::write(dir.path().join("VERSION"), "1.2.3\n").unwrap();

    let summary = bump(&dir, BumpReason::Patch, &no_push());

    assert_eq!(summary.next, "1.2.4");
    assert_eq!(head_message(&repo), "Bump version 1.2.3 → 1.2.4");

    let vcs = summary.vcs.expect("should have committed");
    assert!(vcs.did(VcsStep::Commit));
    assert!(vcs.failed.is_none());
    // Tagging follows a push, and pushing is off.
    assert!(vcs.tag.is_none());
    assert!(repo.find_reference("refs/tags/v1.2.4").is_err());

    // Both files are in the new commit and the worktree is clean.
    assert!(repo.statuses(None).unwrap().is_empty());
    let tree = repo.head().unwrap().peel_to_tree().unwrap();
    assert!(tree.get_name("VERSION").is_some());
}

#[test]
fn test_forced_version_uses_set_message() {
    let (dir, repo) = setup_project(r#"{"version":"1.2.3"}"#);

    bump(&dir, BumpReason::force("3.0.0-beta.2"), &no_push());

    assert_eq!(head_message(&repo), "Set version to 3.0.0-beta.2");
    assert!(fs::read_to_string(dir.path().join("package.json"))
        .unwrap()
        .contains("\"version\": \"3.0.0-beta.2\""));
}

#[test]
fn test_push_without_remote_is_a_warning() {
    let (dir, repo) = setup_project(r#"{"version":"0.9.0"}"#);

    let summary = bump(&dir, BumpReason::Minor, &Settings::default());

    // Files and commit stay; only the push step failed.
    assert_eq!(head_message(&repo), "Bump version 0.9.0 → 0.10.0");
    assert!(fs::read_to_string(dir.path().join("package.json"))
        .unwrap()
        .contains("0.10.0"));

    let vcs = summary.vcs.expect("repository should open");
    assert_eq!(vcs.failed.as_ref().map(|(step, _)| *step), Some(VcsStep::Push));
    assert!(!vcs.did(VcsStep::Tag));
    assert!(repo.find_reference("refs/tags/v0.10.0").is_err());
    assert!(summary
        .warnings
        .iter()
        .any(|w| matches!(w, RunWarning::VcsStepFailed { .. })));
}

#[test]
fn test_no_repository_is_a_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"version":"1.0.0"}"#).unwrap();

    let summary = bump(&dir, BumpReason::Major, &no_push());

    assert_eq!(summary.next, "2.0.0");
    assert!(summary.vcs.is_none());
    assert!(matches!(
        summary.warnings.as_slice(),
        [RunWarning::RepositoryUnavailable { .. }]
    ));
}

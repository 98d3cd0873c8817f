//! Main workflow orchestration logic
//!
//! Reads the metadata, computes the next version, patches every target and
//! hands the changed files to version control. Kept apart from main.rs so the
//! workflow can be driven without clap.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::domain::{BumpReason, BumpTarget};
use crate::error::Result;
use crate::metadata::ProjectMetadata;
use crate::patcher::{patch_target, PatchOptions, PatchOutcome};
use crate::ui::{self, Reporter};
use crate::vcs::{commit_changes, commit_message, Git2Repository, VcsFlags, VcsReport, VersionControl};
use crate::version;
use crate::warning::RunWarning;

/// Version assumed when the metadata has none
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args in a form usable without clap. `None` for a
/// version-control switch means "use the settings file".
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Project root; metadata and target paths are relative to it
    pub root: PathBuf,

    pub reason: BumpReason,

    /// Component bumped when a release enters a pre-release line
    pub target: BumpTarget,

    pub commit: Option<bool>,
    pub push: Option<bool>,
    pub tag: Option<bool>,

    /// Describe the change without writing anything
    pub dry_run: bool,

    /// Add the sample targets section instead of bumping
    pub init: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        RunArgs {
            root: PathBuf::from("."),
            reason: BumpReason::Patch,
            target: BumpTarget::Minor,
            commit: None,
            push: None,
            tag: None,
            dry_run: false,
            init: false,
        }
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpSummary {
    pub current: String,
    pub next: String,

    /// Files written (or that would be), metadata first
    pub changed: Vec<PathBuf>,

    pub warnings: Vec<RunWarning>,

    /// `None` when committing was disabled, skipped by a dry run, or no
    /// repository could be opened
    pub vcs: Option<VcsReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// `--init` added a targets section to this metadata file
    Initialized(PathBuf),
    Bumped(BumpSummary),
}

/// Main bump workflow, committing through the git repository at `args.root`.
pub fn run(args: &RunArgs, settings: &Settings, reporter: &Reporter) -> Result<RunOutcome> {
    run_with(args, settings, reporter, |root| Git2Repository::open(root))
}

/// Main bump workflow with a caller-supplied repository opener.
///
/// 1. Load metadata (fatal when missing or malformed)
/// 2. Compute the next version (fatal on invalid version or transition)
/// 3. Patch each target; failures are warnings and do not stop the run
/// 4. Save metadata and commit, unless this is a dry run
///
/// Failing to open the repository or any version-control step is reported
/// as a warning; the files stay written.
pub fn run_with<R, F>(
    args: &RunArgs,
    settings: &Settings,
    reporter: &Reporter,
    open_repo: F,
) -> Result<RunOutcome>
where
    R: VersionControl,
    F: FnOnce(&Path) -> Result<R>,
{
    let metadata_path = settings.metadata_path(&args.root);
    let section = settings.metadata.section.as_str();
    let mut metadata = ProjectMetadata::load(&metadata_path)?;

    if args.init {
        metadata.init_section(section)?;
        if !args.dry_run {
            metadata.save()?;
        }
        reporter.success(&format!(
            "Added a '{}' section to {}",
            section,
            metadata_path.display()
        ));
        return Ok(RunOutcome::Initialized(metadata_path));
    }

    let tag_pattern = settings.tag_pattern()?;
    let mut warnings = Vec::new();
    let mut reason = args.reason.clone();

    let current = match metadata.version()? {
        Some(version) => version.to_string(),
        None => {
            if !reason.is_forced() {
                let warning = RunWarning::MissingVersion {
                    default: DEFAULT_VERSION.to_string(),
                };
                reporter.warning(&warning);
                warnings.push(warning);
                reason = BumpReason::Set;
            }
            DEFAULT_VERSION.to_string()
        }
    };

    let next = version::compute(&current, &reason, args.target)?;
    reporter.status(&ui::version_change_line(
        &current,
        &next,
        reason == BumpReason::Set,
    ));
    metadata.set_version(&next);

    let options = PatchOptions {
        dry_run: args.dry_run,
    };
    let mut changed = vec![metadata_path.clone()];

    for entry in metadata.targets(section) {
        let (label, result) = match entry {
            Ok(spec) => {
                let label = spec.file.clone().unwrap_or_else(|| "<no file>".to_string());
                let result = patch_target(&spec, &args.root, &current, &next, &options);
                (label, result)
            }
            Err(e) => ("<invalid entry>".to_string(), Err(e)),
        };

        match result {
            Ok(PatchOutcome::Updated(path)) => {
                reporter.success(&format!("Updated {}", label));
                if !changed.contains(&path) {
                    changed.push(path);
                }
            }
            Ok(PatchOutcome::Unchanged(file)) => {
                let warning = RunWarning::TargetUnchanged { file };
                reporter.warning(&warning);
                warnings.push(warning);
            }
            Err(e) => {
                let warning = RunWarning::TargetSkipped {
                    target: label,
                    reason: e.to_string(),
                };
                reporter.warning(&warning);
                warnings.push(warning);
            }
        }
    }

    let flags = VcsFlags {
        commit: args.commit.unwrap_or(settings.behavior.commit),
        push: args.push.unwrap_or(settings.behavior.push),
        tag: args.tag.unwrap_or(settings.behavior.tag),
        forced: reason.is_forced(),
        remote: settings.behavior.remote.clone(),
        tag_pattern,
    };

    if args.dry_run {
        let listed: Vec<String> = changed
            .iter()
            .map(|path| display_path(path, &args.root))
            .collect();
        let message = flags
            .commit
            .then(|| commit_message(&current, &next, flags.forced));
        reporter.dry_run(&listed, message.as_deref());

        return Ok(RunOutcome::Bumped(BumpSummary {
            current,
            next,
            changed,
            warnings,
            vcs: None,
        }));
    }

    metadata.save()?;

    let vcs = if flags.commit {
        match open_repo(&args.root) {
            Ok(repo) => {
                let report = commit_changes(&repo, &changed, &current, &next, &flags);
                match &report.failed {
                    Some((step, reason)) => {
                        let warning = RunWarning::VcsStepFailed {
                            step: step.to_string(),
                            reason: reason.clone(),
                        };
                        reporter.warning(&warning);
                        warnings.push(warning);
                    }
                    None => reporter.success(&format!(
                        "Committed {} file(s){}",
                        changed.len(),
                        report
                            .tag
                            .as_ref()
                            .map(|tag| format!(" and tagged {}", tag))
                            .unwrap_or_default()
                    )),
                }
                Some(report)
            }
            Err(e) => {
                let warning = RunWarning::RepositoryUnavailable {
                    reason: e.to_string(),
                };
                reporter.warning(&warning);
                warnings.push(warning);
                None
            }
        }
    } else {
        None
    };

    Ok(RunOutcome::Bumped(BumpSummary {
        current,
        next,
        changed,
        warnings,
        vcs,
    }))
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

//! Version-control sink
//!
//! The run hands over the list of changed files and the two versions; this
//! module stages, commits, pushes and tags them. The chain stops at the first
//! disabled step or the first failure, and nothing is rolled back.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: records calls, for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use std::fmt;
use std::path::PathBuf;

use crate::domain::TagPattern;
use crate::error::Result;

/// Common git operations needed to publish a version change
pub trait VersionControl {
    /// Add the given files to the index
    fn stage(&self, paths: &[PathBuf]) -> Result<()>;

    /// Commit the index on top of HEAD
    fn commit(&self, message: &str) -> Result<()>;

    /// Push the current branch
    fn push(&self, remote: &str) -> Result<()>;

    /// Create a lightweight tag on HEAD
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push one tag
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        (**self).stage(paths)
    }

    fn commit(&self, message: &str) -> Result<()> {
        (**self).commit(message)
    }

    fn push(&self, remote: &str) -> Result<()> {
        (**self).push(remote)
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        (**self).create_tag(name)
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        (**self).push_tag(remote, name)
    }
}

/// One step of the publish chain, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsStep {
    Stage,
    Commit,
    Push,
    Tag,
    PushTag,
}

impl fmt::Display for VcsStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VcsStep::Stage => write!(f, "add"),
            VcsStep::Commit => write!(f, "commit"),
            VcsStep::Push => write!(f, "push"),
            VcsStep::Tag => write!(f, "tag"),
            VcsStep::PushTag => write!(f, "push tag"),
        }
    }
}

/// Which steps to run and where to push
#[derive(Debug, Clone, PartialEq)]
pub struct VcsFlags {
    pub commit: bool,
    pub push: bool,
    pub tag: bool,
    /// The version was forced rather than derived
    pub forced: bool,
    pub remote: String,
    pub tag_pattern: TagPattern,
}

impl Default for VcsFlags {
    fn default() -> Self {
        VcsFlags {
            commit: true,
            push: true,
            tag: true,
            forced: false,
            remote: "origin".to_string(),
            tag_pattern: TagPattern::default(),
        }
    }
}

/// Outcome of [commit_changes]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VcsReport {
    pub completed: Vec<VcsStep>,
    pub failed: Option<(VcsStep, String)>,
    pub tag: Option<String>,
}

impl VcsReport {
    pub fn did(&self, step: VcsStep) -> bool {
        self.completed.contains(&step)
    }
}

/// Commit message for a version change.
pub fn commit_message(current: &str, next: &str, forced: bool) -> String {
    if forced || current == next {
        format!("Set version to {}", next)
    } else {
        format!("Bump version {} → {}", current, next)
    }
}

/// Runs stage → commit → push → tag → push tag.
///
/// Push requires `flags.push`, and the two tag steps require both
/// `flags.push` and `flags.tag`. Nothing runs unless `flags.commit` is set.
pub fn commit_changes<R: VersionControl + ?Sized>(
    repo: &R,
    changes: &[PathBuf],
    current: &str,
    next: &str,
    flags: &VcsFlags,
) -> VcsReport {
    let mut report = VcsReport::default();
    if !flags.commit {
        return report;
    }

    let message = commit_message(current, next, flags.forced);
    let tag = flags.tag_pattern.format(next);
    let chain = [
        (VcsStep::Stage, true),
        (VcsStep::Commit, true),
        (VcsStep::Push, flags.push),
        (VcsStep::Tag, flags.tag),
        (VcsStep::PushTag, flags.tag),
    ];

    for (step, wanted) in chain {
        if !wanted {
            break;
        }
        let result = match step {
            VcsStep::Stage => repo.stage(changes),
            VcsStep::Commit => repo.commit(&message),
            VcsStep::Push => repo.push(&flags.remote),
            VcsStep::Tag => repo.create_tag(&tag),
            VcsStep::PushTag => repo.push_tag(&flags.remote, &tag),
        };
        match result {
            Ok(()) => {
                if step == VcsStep::Tag {
                    report.tag = Some(tag.clone());
                }
                report.completed.push(step);
            }
            Err(e) => {
                report.failed = Some((step, e.to_string()));
                break;
            }
        }
    }

    report
}

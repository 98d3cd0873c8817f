use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::{Result, VerbumpError};
use crate::vcs::{VcsStep, VersionControl};

/// Mock repository that records calls instead of touching git
#[derive(Debug, Default)]
pub struct MockRepository {
    calls: RefCell<Vec<String>>,
    fail_on: Option<VcsStep>,
}

impl MockRepository {
    /// Create a mock where every step succeeds
    pub fn new() -> Self {
        MockRepository::default()
    }

    /// Create a mock whose `step` fails
    pub fn failing_on(step: VcsStep) -> Self {
        MockRepository {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(step),
        }
    }

    /// Successful calls so far, one line each
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, step: VcsStep, call: String) -> Result<()> {
        if self.fail_on == Some(step) {
            return Err(VerbumpError::Git(git2::Error::from_str(&format!(
                "simulated {} failure",
                step
            ))));
        }
        self.calls.borrow_mut().push(call);
        Ok(())
    }
}

impl VersionControl for MockRepository {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        self.record(VcsStep::Stage, format!("add {}", listed.join(" ")))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(VcsStep::Commit, format!("commit {}", message))
    }

    fn push(&self, remote: &str) -> Result<()> {
        self.record(VcsStep::Push, format!("push {}", remote))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record(VcsStep::Tag, format!("tag {}", name))
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.record(VcsStep::PushTag, format!("push {} {}", remote, name))
    }
}

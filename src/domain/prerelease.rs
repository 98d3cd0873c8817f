//! Pre-release stages and revisions
//!
//! Only three stages exist and they form a fixed progression:
//! alpha < beta < rc. A pre-release may move up the progression or be
//! released, never back down.

use crate::error::{Result, VerbumpError};
use std::fmt;
use std::str::FromStr;

/// Pre-release stage, ordered by position in the progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl Stage {
    /// The progression in order. Moves are only allowed rightwards.
    pub const PROGRESSION: [Stage; 3] = [Stage::Alpha, Stage::Beta, Stage::ReleaseCandidate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Alpha => "alpha",
            Stage::Beta => "beta",
            Stage::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for Stage {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alpha" => Ok(Stage::Alpha),
            "beta" => Ok(Stage::Beta),
            "rc" => Ok(Stage::ReleaseCandidate),
            other => Err(VerbumpError::transition(format!(
                "'{}' is not a pre-release stage (expected alpha, beta or rc)",
                other
            ))),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stage plus revision counter, e.g. "beta.4"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreRelease {
    pub stage: Stage,
    pub revision: u64,
}

impl PreRelease {
    pub fn new(stage: Stage, revision: u64) -> Self {
        PreRelease { stage, revision }
    }

    /// First revision of a stage ("alpha.0")
    pub fn start(stage: Stage) -> Self {
        PreRelease::new(stage, 0)
    }

    /// Same stage, revision + 1
    pub fn next_revision(&self) -> Result<Self> {
        let revision = self.revision.checked_add(1).ok_or_else(|| {
            VerbumpError::transition(format!("revision counter of '{}' overflows", self))
        })?;
        Ok(PreRelease::new(self.stage, revision))
    }

    /// Move to `stage`, refusing to go backwards in the progression.
    ///
    /// Moving to the current stage bumps the revision instead.
    pub fn advance_to(&self, stage: Stage) -> Result<Self> {
        if stage == self.stage {
            return self.next_revision();
        }
        if stage < self.stage {
            return Err(VerbumpError::transition(format!(
                "I don't support going from {} to {}",
                self.stage, stage
            )));
        }
        Ok(PreRelease::start(stage))
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.stage, self.revision)
    }
}

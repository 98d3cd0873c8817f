use crate::domain::prerelease::Stage;
use std::fmt;

/// Release component to increment.
///
/// Also used as the starting point when a release version enters a
/// pre-release line ("alpha minor" on 1.2.3 gives 1.3.0-alpha.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BumpTarget {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpTarget::Major => write!(f, "major"),
            BumpTarget::Minor => write!(f, "minor"),
            BumpTarget::Patch => write!(f, "patch"),
        }
    }
}

/// Why the version is changing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpReason {
    Major,
    Minor,
    /// On a pre-release this bumps the revision instead of the patch number.
    Patch,
    /// Drop the pre-release stage
    Release,
    /// Keep the current version as is
    Set,
    /// Replace the version with the given one
    Force(String),
    /// Enter or move along the pre-release progression
    Stage(Stage),
}

impl BumpReason {
    pub fn force(version: impl Into<String>) -> Self {
        BumpReason::Force(version.into())
    }

    pub fn is_forced(&self) -> bool {
        matches!(self, BumpReason::Force(_))
    }
}

impl fmt::Display for BumpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpReason::Major => write!(f, "major"),
            BumpReason::Minor => write!(f, "minor"),
            BumpReason::Patch => write!(f, "patch"),
            BumpReason::Release => write!(f, "release"),
            BumpReason::Set => write!(f, "set"),
            BumpReason::Force(version) => write!(f, "force {}", version),
            BumpReason::Stage(stage) => write!(f, "{}", stage),
        }
    }
}

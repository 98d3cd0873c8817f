use crate::domain::prerelease::{PreRelease, Stage};
use crate::domain::reason::{BumpReason, BumpTarget};
use crate::error::{Result, VerbumpError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// MAJOR.MINOR.PATCH with an optional -STAGE.REVISION suffix
const VERSION_PATTERN: &str =
    r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-(alpha|beta|rc)\.(0|[1-9]\d*))?$";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Semantic version, either a release or a pre-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<PreRelease>,
}

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: None,
        }
    }

    pub fn with_pre(self, pre: PreRelease) -> Self {
        Version {
            pre: Some(pre),
            ..self
        }
    }

    /// Parse a version string, rejecting anything outside the grammar
    /// (leading zeros, unknown stages, build metadata, "v" prefixes).
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || VerbumpError::InvalidVersion(s.to_string());
        let caps = version_regex().captures(s).ok_or_else(invalid)?;

        let number = |i: usize| -> Result<u64> { caps[i].parse::<u64>().map_err(|_| invalid()) };
        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        let pre = match (caps.get(4), caps.get(5)) {
            (Some(stage), Some(revision)) => Some(PreRelease::new(
                stage.as_str().parse::<Stage>()?,
                revision.as_str().parse::<u64>().map_err(|_| invalid())?,
            )),
            _ => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre,
        })
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// The release part only (stage dropped)
    pub fn release(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Increment one release component and zero the lower ones.
    ///
    /// The stage is dropped; callers decide whether a new one applies.
    pub fn bump(&self, target: BumpTarget) -> Result<Self> {
        let overflow = || VerbumpError::transition(format!("{} overflows on {} bump", self, target));
        let next = match target {
            BumpTarget::Major => {
                Version::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0)
            }
            BumpTarget::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            BumpTarget::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }

    /// Compute the version that follows this one for `reason`.
    ///
    /// `target` only matters when a release version starts a pre-release
    /// line; it names the component incremented before the stage is added.
    pub fn next(&self, reason: &BumpReason, target: BumpTarget) -> Result<Self> {
        match reason {
            BumpReason::Force(forced) => {
                Version::parse(forced).map_err(|_| VerbumpError::InvalidForceTarget(forced.clone()))
            }
            BumpReason::Set => Ok(*self),
            BumpReason::Release => match self.pre {
                Some(_) => Ok(self.release()),
                None => Err(VerbumpError::transition(format!(
                    "\"release\" is only valid on a pre-release stage, and {} is a release",
                    self
                ))),
            },
            BumpReason::Major | BumpReason::Minor => {
                if self.is_prerelease() {
                    return Err(VerbumpError::transition(format!(
                        "{} is a pre-release. Please use 'release' rather than '{}'",
                        self, reason
                    )));
                }
                let target = if *reason == BumpReason::Major {
                    BumpTarget::Major
                } else {
                    BumpTarget::Minor
                };
                self.bump(target)
            }
            BumpReason::Patch => match self.pre {
                Some(pre) => Ok(self.release().with_pre(pre.next_revision()?)),
                None => self.bump(BumpTarget::Patch),
            },
            BumpReason::Stage(stage) => match self.pre {
                Some(pre) => Ok(self.release().with_pre(pre.advance_to(*stage)?)),
                None => Ok(self.bump(target)?.with_pre(PreRelease::start(*stage))),
            },
        }
    }
}

impl FromStr for Version {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.pre {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

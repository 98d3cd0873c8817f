//! Next-version computation on version strings.

pub use crate::domain::{BumpReason, BumpTarget, Stage, Version};
use crate::error::Result;

/// Computes the version that follows `current` for the given bump reason.
///
/// `current` must match `MAJOR.MINOR.PATCH[-STAGE.REVISION]` with STAGE one of
/// alpha, beta or rc. Rules:
/// - **force**: the forced version, if it is valid
/// - **set**: `current` unchanged
/// - **release**: drops the stage; fails on a release version
/// - **major** / **minor**: increments and zeroes lower components; fails on a pre-release
/// - **patch**: bumps the revision on a pre-release, the patch number otherwise
/// - **alpha** / **beta** / **rc**: bumps the revision on the same stage, moves
///   forward to a later stage, or starts a new pre-release line after
///   incrementing the `target` component of a release version
///
/// # Errors
/// * `InvalidVersion` - `current` is not a version
/// * `InvalidTransition` - the reason is not allowed from `current`
/// * `InvalidForceTarget` - the forced version is not a version
///
/// # Example
/// ```
/// use verbump::version::{compute, BumpReason, BumpTarget, Stage};
///
/// let next = compute("1.2.3", &BumpReason::Stage(Stage::Alpha), BumpTarget::Minor).unwrap();
/// assert_eq!(next, "1.3.0-alpha.0");
/// ```
pub fn compute(current: &str, reason: &BumpReason, target: BumpTarget) -> Result<String> {
    let current = Version::parse(current)?;
    Ok(current.next(reason, target)?.to_string())
}

//! Domain logic - pure value types independent of files and git

pub mod prerelease;
pub mod reason;
pub mod tag;
pub mod target;
pub mod version;

pub use prerelease::{PreRelease, Stage};
pub use reason::{BumpReason, BumpTarget};
pub use tag::TagPattern;
pub use target::{TargetLocator, TargetSpec, VERSION_PLACEHOLDER};
pub use version::Version;

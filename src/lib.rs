pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod metadata;
pub mod patcher;
pub mod ui;
pub mod vcs;
pub mod version;
pub mod warning;

pub use error::{Result, VerbumpError};

use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for verbump operations
#[derive(Error, Debug)]
pub enum VerbumpError {
    #[error("The version \"{0}\" isn't in a form I know how to handle")]
    InvalidVersion(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("The forced version \"{0}\" is invalid")]
    InvalidForceTarget(String),

    #[error("Skipping invalid target {0}")]
    InvalidTarget(String),

    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotARegularFile(PathBuf),

    #[error("'{}' does not appear to be a valid JSON file: {reason}", .path.display())]
    InvalidJson { path: PathBuf, reason: String },

    #[error("'{}' does not have the key '{key}'", .path.display())]
    MissingKey { path: PathBuf, key: String },

    #[error("Couldn't find '{search}' in '{}'", .path.display())]
    PatternNotFound { path: PathBuf, search: String },

    #[error("No metadata file at '{}'", .0.display())]
    MetadataMissing(PathBuf),

    #[error("Metadata file '{}' is ill-formed: {reason}", .path.display())]
    MetadataMalformed { path: PathBuf, reason: String },

    #[error("There is already a '{0}' section in the metadata file")]
    AlreadyInitialized(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in verbump
pub type Result<T> = std::result::Result<T, VerbumpError>;

impl VerbumpError {
    /// Create a transition error with context
    pub fn transition(msg: impl Into<String>) -> Self {
        VerbumpError::InvalidTransition(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VerbumpError::Config(msg.into())
    }

    /// Process exit status for an error that ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            VerbumpError::MetadataMalformed { .. } => 2,
            VerbumpError::AlreadyInitialized(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VerbumpError::config("bad pattern");
        assert_eq!(err.to_string(), "Configuration error: bad pattern");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VerbumpError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_name_the_file() {
        let err = VerbumpError::MissingKey {
            path: PathBuf::from("some-dir/app.json"),
            key: "nested.version".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("some-dir/app.json"));
        assert!(msg.contains("nested.version"));

        let err = VerbumpError::NotARegularFile(PathBuf::from("some-dir"));
        assert_eq!(err.to_string(), "'some-dir' is not a regular file");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            VerbumpError::MetadataMissing(PathBuf::from("package.json")).exit_code(),
            1
        );
        assert_eq!(
            VerbumpError::MetadataMalformed {
                path: PathBuf::from("package.json"),
                reason: "expected value".to_string(),
            }
            .exit_code(),
            2
        );
        assert_eq!(
            VerbumpError::AlreadyInitialized("verbump".to_string()).exit_code(),
            3
        );
        assert_eq!(VerbumpError::transition("rc to alpha").exit_code(), 1);
    }
}

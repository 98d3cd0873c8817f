use std::fmt;
use std::path::PathBuf;

/// Non-fatal issues met during a run.
/// The run carries on after each of these; they are reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum RunWarning {
    /// Metadata has no version; the run sets the given default instead
    MissingVersion { default: String },
    /// A target could not be patched
    TargetSkipped { target: String, reason: String },
    /// A key target held a different value, so the file was left alone
    TargetUnchanged { file: PathBuf },
    /// No repository to commit to
    RepositoryUnavailable { reason: String },
    /// A version-control step failed; later steps were not attempted
    VcsStepFailed { step: String, reason: String },
}

impl fmt::Display for RunWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunWarning::MissingVersion { default } => {
                write!(f, "No \"version\" key in metadata. Setting version to {}", default)
            }
            RunWarning::TargetSkipped { target, reason } => {
                write!(f, "Skipping target {}: {}", target, reason)
            }
            RunWarning::TargetUnchanged { file } => write!(
                f,
                "'{}' does not hold the current version; left unchanged",
                file.display()
            ),
            RunWarning::RepositoryUnavailable { reason } => {
                write!(f, "Not committing, no usable git repository: {}", reason)
            }
            RunWarning::VcsStepFailed { step, reason } => {
                write!(f, "git {} failed, stopping there: {}", step, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_skipped_display() {
        let warning = RunWarning::TargetSkipped {
            target: "setup.py".to_string(),
            reason: "File 'setup.py' not found".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("setup.py"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_missing_version_display() {
        let warning = RunWarning::MissingVersion {
            default: "1.0.0".to_string(),
        };
        assert!(warning.to_string().ends_with("Setting version to 1.0.0"));
    }

    #[test]
    fn test_vcs_step_failed_display() {
        let warning = RunWarning::VcsStepFailed {
            step: "push".to_string(),
            reason: "Network error".to_string(),
        };
        assert_eq!(warning.to_string(), "git push failed, stopping there: Network error");
    }
}

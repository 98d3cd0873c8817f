//! User interface module - console output.
//!
//! - `formatter` - formatting and printing functions
//! - [Reporter] - applies the `--quiet` flag on top of them

pub mod formatter;

pub use formatter::{
    display_dry_run, display_error, display_status, display_success, display_warning,
    version_change_line,
};

use crate::warning::RunWarning;

/// Console reporter for a run.
///
/// Quiet mode hides progress lines and the missing-version notice. Other
/// warnings and errors are always shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Reporter { quiet }
    }

    pub fn quiet() -> Self {
        Reporter::new(true)
    }

    pub fn status(&self, message: &str) {
        if !self.quiet {
            display_status(message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.quiet {
            display_success(message);
        }
    }

    pub fn warning(&self, warning: &RunWarning) {
        if self.quiet && matches!(warning, RunWarning::MissingVersion { .. }) {
            return;
        }
        display_warning(warning);
    }

    pub fn dry_run(&self, changed: &[String], commit_message: Option<&str>) {
        if !self.quiet {
            display_dry_run(changed, commit_message);
        }
    }
}

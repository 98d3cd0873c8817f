//! Pure formatting functions for console output.
//!
//! Nothing here decides whether to print; see [crate::ui::Reporter] for the
//! quiet handling.

use console::style;

use crate::warning::RunWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning to the user.
pub fn display_warning(warning: &RunWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Headline for the version change.
///
/// Shows either "Setting version to X" when nothing is derived, or
/// "Bumping version from X to Y".
pub fn version_change_line(current: &str, next: &str, setting: bool) -> String {
    if setting {
        format!("Setting version to {}", style(next).green())
    } else {
        format!(
            "Bumping version from {} to {}",
            style(current).red(),
            style(next).green()
        )
    }
}

/// Display what a dry run would have done.
///
/// # Arguments
/// * `changed` - Files that would be written, in order
/// * `commit_message` - Message of the commit that would be created, if any
pub fn display_dry_run(changed: &[String], commit_message: Option<&str>) {
    println!("\n{}", style("Dry run, nothing written:").bold());
    for file in changed {
        println!("  would update {}", file);
    }
    if let Some(message) = commit_message {
        println!("  would commit \"{}\"", message);
    }
}

//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Errors go to stderr so that `--json` output on stdout stays parseable.

use colored::*;

/// Formats and prints an error message
///
/// # Format
/// ```text
/// Error: <message>
/// ```
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

/// Formats and prints an informational message to stdout
pub fn print_info(message: &str) {
    println!("{message}");
}

/// Turn colored output on or off for the whole process
pub fn set_color_enabled(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

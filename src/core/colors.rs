//! Unified color system for repository status visualization.
//!
//! # Public API
//! - [`get_status_color_style`]: Get color function for a repository status
//! - [`get_status_icon`]: Bracketed marker shown in front of each report line
//! - [`get_status_label`]: Human readable status text
//!
//! # Color Scheme
//! - **Clean**: Green
//! - **Dirty / unpushed**: Yellow
//! - **Error**: Red bold
//! - **Uninitialized directories**: Cyan

use crate::core::record::StatusKind;
use colored::*;

/// Returns a closure that applies the color for `kind` to any text
pub fn get_status_color_style(kind: &StatusKind) -> Box<dyn Fn(&str) -> ColoredString> {
    match kind {
        StatusKind::Clean => Box::new(|text: &str| text.green()),
        StatusKind::Dirty | StatusKind::DirtyAndUnpushed | StatusKind::CleanAndUnpushed => {
            Box::new(|text: &str| text.yellow())
        }
        StatusKind::Error(_) => Box::new(|text: &str| text.red().bold()),
    }
}

/// Color used for uninitialized directories
pub fn get_uninitialized_color(text: &str) -> ColoredString {
    text.cyan()
}

pub fn get_status_icon(kind: &StatusKind) -> &'static str {
    match kind {
        StatusKind::Error(_) => "[!]",
        StatusKind::Clean => "[OK]",
        _ => "[*]",
    }
}

pub fn get_status_label(kind: &StatusKind) -> String {
    match kind {
        StatusKind::Clean => "CLEAN".to_string(),
        StatusKind::Dirty => "DIRTY (Uncommitted)".to_string(),
        StatusKind::DirtyAndUnpushed => "DIRTY (Uncommitted), UNPUSHED COMMITS".to_string(),
        StatusKind::CleanAndUnpushed => "CLEAN, UNPUSHED COMMITS".to_string(),
        StatusKind::Error(message) => format!("[ERROR: {message}]"),
    }
}

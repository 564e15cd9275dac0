//! Core functionality for the git-scout tool.
//!
//! This module provides the building blocks of a scan: the tree walk, the
//! repository detectors, the result records and their rendering.

pub mod ancestry;
pub mod classifier;
pub mod colors;
pub mod config;
pub mod detector;
pub mod dirs;
pub mod error;
pub mod extensions;
pub mod git_cli;
pub mod libgit2;
pub mod output;
pub mod record;
pub mod report;
pub mod templates;

// === Error handling ===
pub use error::{Result, ScoutError};

// === Classification ===
// Single walk over the tree, pruned at repository roots
pub use classifier::{TreeClassifier, Visit};
pub use ancestry::filter_topmost;
pub use extensions::SourceExtensions;

// === Repository detection ===
// One detector per backend behind a common trait
pub use detector::RepositoryDetector;
pub use git_cli::{CommandOutput, CommandRunner, GitCliDetector, ProcessRunner};
pub use libgit2::Libgit2Detector;

// === Records ===
pub use record::{RepoStatus, RepositoryRecord, ScanResult, StatusKind};

// === Configuration ===
pub use config::{Backend, ScoutConfig};

// === Report ===
pub use report::{render_json, render_report, ReportOptions};

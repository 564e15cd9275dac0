//! Git Scout - audit a workspace for forgotten work.
//!
//! This library walks a directory tree once and reports:
//! - every git repository, with whether it is dirty, has unpushed commits, or
//!   could not be probed
//! - every directory holding source code that is not under version control,
//!   collapsed to the topmost such directory
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Tree classification and the topmost-directory filter
//! - Repository detectors (git command line, libgit2)
//! - Scan records and report rendering
//! - Error handling and configuration

pub mod commands;
pub mod core;

pub use crate::core::{
    filter_topmost,
    render_json,
    render_report,
    Backend,
    GitCliDetector,
    Libgit2Detector,
    ProcessRunner,
    RepoStatus,
    ReportOptions,
    RepositoryDetector,
    RepositoryRecord,
    Result,
    ScanResult,
    ScoutConfig,
    ScoutError,
    SourceExtensions,
    StatusKind,
    TreeClassifier,
    Visit,
};

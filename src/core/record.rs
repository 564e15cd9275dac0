//! Scan result data structures.
//!
//! This module defines the records produced by a single scan. Nothing here
//! outlives one invocation; the records are built once during the walk and are
//! immutable afterwards.
//!
//! # Public API
//! - [`RepoStatus`]: Raw probe result (dirty, unpushed, optional error)
//! - [`StatusKind`]: Collapsed status used for display and grouping
//! - [`RepositoryRecord`]: A discovered repository root with its status
//! - [`ScanResult`]: Both collections of one scan

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of probing one repository root.
///
/// An `error` supersedes both booleans for display purposes, but the record
/// is still reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatus {
    pub is_dirty: bool,
    pub has_unpushed: bool,
    pub error: Option<String>,
}

/// Collapsed repository status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusKind {
    Clean,
    Dirty,
    DirtyAndUnpushed,
    CleanAndUnpushed,
    Error(String),
}

impl RepoStatus {
    pub fn clean() -> Self {
        Self::default()
    }

    /// A status carrying only an error; dirty and unpushed stay false
    pub fn failed(message: impl AsRef<str>) -> Self {
        let mut status = Self::default();
        status.set_error(message);
        status
    }

    /// Record an error, folded onto a single line
    pub fn set_error(&mut self, message: impl AsRef<str>) {
        self.error = Some(single_line(message.as_ref()));
    }

    pub fn kind(&self) -> StatusKind {
        if let Some(message) = &self.error {
            return StatusKind::Error(message.clone());
        }
        match (self.is_dirty, self.has_unpushed) {
            (false, false) => StatusKind::Clean,
            (true, false) => StatusKind::Dirty,
            (true, true) => StatusKind::DirtyAndUnpushed,
            (false, true) => StatusKind::CleanAndUnpushed,
        }
    }

    /// True when the repository needs attention (dirty, unpushed or failed)
    pub fn needs_attention(&self) -> bool {
        self.error.is_some() || self.is_dirty || self.has_unpushed
    }
}

impl StatusKind {
    /// Sort key used to group repositories in the report
    pub fn sort_priority(&self) -> u8 {
        match self {
            StatusKind::Error(_) => 0,
            StatusKind::DirtyAndUnpushed => 1,
            StatusKind::Dirty => 2,
            StatusKind::CleanAndUnpushed => 3,
            StatusKind::Clean => 4,
        }
    }
}

/// Join the non-blank lines of a diagnostic with `; `
fn single_line(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub path: PathBuf,
    /// Name of the detector that recognised this root
    pub vcs: String,
    pub status: RepoStatus,
}

/// Both collections produced by one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub repositories: Vec<RepositoryRecord>,
    pub uninitialized: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn repository_paths(&self) -> Vec<&Path> {
        self.repositories.iter().map(|r| r.path.as_path()).collect()
    }

    /// Sort repositories by path, as the report expects
    pub fn sort(&mut self) {
        self.repositories.sort_by(|a, b| a.path.cmp(&b.path));
        self.uninitialized.sort();
    }

    /// Rewrite every path relative to `root` (`.` for the root itself).
    /// Paths outside `root` are kept as they are.
    pub fn relative_to(&self, root: &Path) -> ScanResult {
        ScanResult {
            repositories: self
                .repositories
                .iter()
                .map(|r| RepositoryRecord {
                    path: relative_path(&r.path, root),
                    ..r.clone()
                })
                .collect(),
            uninitialized: self
                .uninitialized
                .iter()
                .map(|p| relative_path(p, root))
                .collect(),
        }
    }
}

/// Display path of `path` relative to `root`
pub fn relative_path(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

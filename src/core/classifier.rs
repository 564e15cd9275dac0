//! Directory tree classification.
//!
//! This module provides [`TreeClassifier`], which walks a directory tree once
//! and sorts every directory into one of three buckets:
//!
//! - **Repository roots**: a detector recognises the directory. It is probed
//!   once and the walk does not descend into it.
//! - **Uninitialized candidates**: the directory directly holds a recognized
//!   source file. The walk still descends, since a repository may sit deeper.
//! - **Everything else**: descended into, never recorded.
//!
//! # Traversal
//! - Pre-order, siblings sorted by file name, so results are deterministic
//! - Symbolic links are never followed
//! - An unreadable directory is logged and skipped with its subtree

use crate::core::{
    ancestry::filter_topmost,
    detector::RepositoryDetector,
    error::{Result, ScoutError},
    extensions::SourceExtensions,
    record::{RepositoryRecord, ScanResult},
};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// What the walk should do after visiting a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Descend,
    Prune,
}

pub struct TreeClassifier {
    detectors: Vec<Box<dyn RepositoryDetector>>,
    extensions: SourceExtensions,
}

impl TreeClassifier {
    pub fn new(detectors: Vec<Box<dyn RepositoryDetector>>, extensions: SourceExtensions) -> Self {
        Self {
            detectors,
            extensions,
        }
    }

    /// Walk `root` and return the raw classification.
    ///
    /// Uninitialized candidates are returned unfiltered, in walk order.
    pub fn classify(&self, root: &Path) -> ScanResult {
        let mut result = ScanResult::new();
        let mut walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable path: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            if self.visit(entry.path(), &mut result) == Visit::Prune {
                walker.skip_current_dir();
            }
        }

        result
    }

    /// Classify `root`, keep only topmost uninitialized directories and sort
    /// both collections by path.
    pub fn scan(&self, root: &Path) -> ScanResult {
        let mut result = self.classify(root);
        result.uninitialized = filter_topmost(&result.uninitialized);
        result.sort();
        log::debug!(
            "Scan of {} found {} repositories and {} uninitialized directories",
            root.display(),
            result.repositories.len(),
            result.uninitialized.len()
        );
        result
    }

    /// Classify one directory and decide whether to walk into it
    pub fn visit(&self, dir: &Path, result: &mut ScanResult) -> Visit {
        if let Some(detector) = self.detectors.iter().find(|d| d.detect_marker(dir)) {
            log::debug!("Found {} repository at {}", detector.name(), dir.display());
            result.repositories.push(RepositoryRecord {
                path: dir.to_path_buf(),
                vcs: detector.name().to_string(),
                status: detector.probe(dir),
            });
            return Visit::Prune;
        }

        match self.contains_source_file(dir) {
            Ok(true) => result.uninitialized.push(dir.to_path_buf()),
            Ok(false) => {}
            Err(e) => {
                log::warn!("{e}, skipping");
                return Visit::Prune;
            }
        }

        Visit::Descend
    }

    fn contains_source_file(&self, dir: &Path) -> Result<bool> {
        let entries = fs::read_dir(dir).map_err(|e| ScoutError::traversal_access(dir, e))?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping entry in {}: {e}", dir.display());
                    continue;
                }
            };
            // symlinks count as leaf files, whatever they point at
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir && self.extensions.matches(&entry.file_name()) {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

//! Topmost-directory filter for uninitialized candidates.
//!
//! A project without version control usually shows up many times: the
//! project directory itself, `src/`, `docs/`, and so on. [`filter_topmost`]
//! keeps only the outermost entry of each such group.

use std::path::{Path, PathBuf};

/// True when `path` lies strictly below `ancestor`.
///
/// Comparison is by whole path components: `/a/bb` is not below `/a/b`.
pub fn is_strict_descendant(path: &Path, ancestor: &Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}

/// Drop every path that is a strict descendant of another path in the input.
///
/// The output is sorted and free of duplicates, so it only depends on the set
/// of input paths, not on their order.
pub fn filter_topmost(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut sorted: Vec<&PathBuf> = paths.iter().collect();
    // component-wise ordering puts every ancestor right before its descendants
    sorted.sort();
    sorted.dedup();

    let mut kept: Vec<PathBuf> = Vec::new();
    for candidate in sorted {
        // descendants of a kept path form one contiguous run after it
        let covered = kept
            .last()
            .is_some_and(|parent| is_strict_descendant(candidate, parent));
        if !covered {
            kept.push(candidate.clone());
        }
    }
    kept
}

//! Repository detection seam.
//!
//! The tree walk only knows about [`RepositoryDetector`]: something that can
//! recognise a repository root by its marker and probe its status. Each
//! supported version-control backend provides one implementation, so adding
//! another system does not touch the classifier.

use crate::core::{
    config::{Backend, ScoutConfig},
    git_cli::{GitCliDetector, ProcessRunner},
    libgit2::Libgit2Detector,
    record::RepoStatus,
};
use std::path::Path;

/// Name of the git marker directory
pub const GIT_MARKER: &str = ".git";

pub trait RepositoryDetector {
    /// Short name of the version-control system, shown in verbose output
    fn name(&self) -> &str;

    /// True when `dir` is a repository root for this system
    fn detect_marker(&self, dir: &Path) -> bool;

    /// Probe the status of a repository root.
    ///
    /// Never fails: any problem is folded into [`RepoStatus::error`] so one
    /// broken repository cannot abort the scan.
    fn probe(&self, root: &Path) -> RepoStatus;
}

/// A directory is a git root when it directly contains a `.git` directory
pub fn has_git_marker(dir: &Path) -> bool {
    dir.join(GIT_MARKER).is_dir()
}

/// Build the detectors selected by the configuration
pub fn detectors_for(config: &ScoutConfig) -> Vec<Box<dyn RepositoryDetector>> {
    let detector: Box<dyn RepositoryDetector> = match config.backend {
        Backend::Git => {
            let runner = ProcessRunner::new(&config.git_program, config.probe_timeout());
            Box::new(GitCliDetector::new(runner))
        }
        Backend::Libgit2 => Box::new(Libgit2Detector::new()),
    };
    vec![detector]
}

//! In-process repository probing through `git2`.
//!
//! [`Libgit2Detector`] answers the same two questions as the command line
//! backend without spawning processes:
//! - **Dirty**: any status entry (untracked included, ignored excluded)
//! - **Unpushed**: the current branch is ahead of its configured upstream
//!
//! A repository without an upstream, with an unborn branch or with a detached
//! HEAD is never reported as unpushed.

use crate::core::{
    detector::{has_git_marker, RepositoryDetector},
    error::Result,
    record::RepoStatus,
};
use git2::{BranchType, ErrorCode, Repository, StatusOptions};
use std::path::Path;

#[derive(Debug, Default)]
pub struct Libgit2Detector;

impl Libgit2Detector {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryDetector for Libgit2Detector {
    fn name(&self) -> &str {
        "git (libgit2)"
    }

    fn detect_marker(&self, dir: &Path) -> bool {
        has_git_marker(dir)
    }

    fn probe(&self, root: &Path) -> RepoStatus {
        let repo = match Repository::open(root) {
            Ok(repo) => repo,
            Err(e) => return RepoStatus::failed(e.message()),
        };

        let is_dirty = match is_dirty(&repo) {
            Ok(dirty) => dirty,
            Err(e) => return RepoStatus::failed(e.to_string()),
        };

        let mut status = RepoStatus {
            is_dirty,
            ..RepoStatus::default()
        };
        match ahead_of_upstream(&repo) {
            Ok(Some(ahead)) => status.has_unpushed = ahead > 0,
            Ok(None) => log::debug!("No upstream configured for {}", root.display()),
            Err(e) => status.set_error(e.to_string()),
        }
        status
    }
}

fn is_dirty(repo: &Repository) -> Result<bool> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true);
    opts.include_ignored(false);

    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(!statuses.is_empty())
}

/// Number of local commits missing from the upstream, or `None` when the
/// current branch has no upstream
fn ahead_of_upstream(repo: &Repository) -> Result<Option<usize>> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None)
        }
        Err(e) => return Err(e.into()),
    };

    if !head.is_branch() {
        return Ok(None);
    }
    let (Some(local_oid), Some(branch_name)) = (head.target(), head.shorthand()) else {
        return Ok(None);
    };

    let local_branch = repo.find_branch(branch_name, BranchType::Local)?;
    let upstream_branch = match local_branch.upstream() {
        Ok(upstream) => upstream,
        Err(_) => return Ok(None),
    };
    let Some(upstream_oid) = upstream_branch.get().target() else {
        return Ok(None);
    };

    let (ahead, _behind) = repo.graph_ahead_behind(local_oid, upstream_oid)?;
    Ok(Some(ahead))
}

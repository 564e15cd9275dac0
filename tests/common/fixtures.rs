//! Test data generation utilities and predefined scenarios
//!
//! Builds a workspace with one directory per interesting state, so scans can
//! be checked against known answers.

#![allow(dead_code)]

use super::repository::*;
use git_scout::core::error::Result;

/// Reference workspace:
///
/// ```text
/// repo_clean/              committed README.md, no upstream
/// repo_dirty/              committed main.py, modified afterwards
/// repo_unpushed/           tracks a bare upstream, one commit ahead
/// code_no_git/script.js    code without version control
/// code_no_git/src/app.ts   nested code, collapsed into code_no_git
/// empty_dir/               nothing
/// project_group/nested_repo/  committed lib.cpp, group has no code of its own
/// ```
///
/// The bare upstream lives in a separate directory outside the workspace.
pub struct Workspace {
    pub root: TestDir,
    pub upstreams: TestDir,
}

pub fn create_reference_workspace() -> Result<Workspace> {
    let root = TestDir::new()?;
    let upstreams = TestDir::new()?;

    init_repo_with_commit(&root.join("repo_clean"), "README.md", "# Clean Repo")?;

    let dirty = root.join("repo_dirty");
    init_repo_with_commit(&dirty, "main.py", "print('hello')")?;
    create_file(&dirty, "main.py", "print('hello world')")?;

    let unpushed = root.join("repo_unpushed");
    init_repo_with_commit(&unpushed, "lib.rs", "pub fn a() {}\n")?;
    attach_upstream(&unpushed, &upstreams.join("repo_unpushed.git"))?;
    create_file(&unpushed, "lib.rs", "pub fn b() {}\n")?;
    commit_all(&unpushed, "Local work")?;

    create_file(&root.join("code_no_git"), "script.js", "console.log('hi')")?;
    create_file(&root.join("code_no_git"), "src/app.ts", "export {}")?;

    std::fs::create_dir_all(root.join("empty_dir"))?;

    init_repo_with_commit(
        &root.join("project_group/nested_repo"),
        "lib.cpp",
        "// clean cpp",
    )?;

    Ok(Workspace { root, upstreams })
}

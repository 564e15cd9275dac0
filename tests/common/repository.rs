//! Git repository management and setup utilities
//!
//! Provides functions for creating real git repositories in temporary
//! directories, committing to them and wiring them to a local upstream.

#![allow(dead_code)]

use git_scout::core::error::{Result, ScoutError};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temporary directory that holds one or more test repositories.
/// The TempDir must be kept alive for the duration of the test.
pub struct TestDir {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestDir {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        // canonical so that paths match what the scanner reports
        let path = fs::canonicalize(temp_dir.path())?;
        Ok(Self { temp_dir, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }
}

/// Runs git in `dir`, failing when git exits non-zero
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(["-c", "commit.gpgsign=false", "-c", "init.defaultBranch=main"])
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()?;

    if !output.status.success() {
        return Err(ScoutError::probe_invocation(
            format!("git {}", args.join(" ")),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Initializes `dir` (created if needed) as a git repository on branch `main`
/// with a local identity, so commits never prompt.
pub fn init_repo(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    git(dir, &["init"])?;
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"])?;
    git(dir, &["config", "user.name", "Test User"])?;
    git(dir, &["config", "user.email", "test@example.com"])?;
    Ok(())
}

/// Creates a file (and its parent directories) with the given content
pub fn create_file(dir: &Path, relative: &str, content: &str) -> Result<()> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Stages everything and commits it
pub fn commit_all(dir: &Path, message: &str) -> Result<()> {
    git(dir, &["add", "."])?;
    git(dir, &["commit", "-m", message])?;
    Ok(())
}

/// Initializes a repository holding one committed file
pub fn init_repo_with_commit(dir: &Path, file: &str, content: &str) -> Result<()> {
    init_repo(dir)?;
    create_file(dir, file, content)?;
    commit_all(dir, "Initial")
}

/// Creates a bare repository at `bare`, adds it as `origin` of `repo` and
/// pushes `main` with upstream tracking
pub fn attach_upstream(repo: &Path, bare: &Path) -> Result<()> {
    fs::create_dir_all(bare)?;
    git(bare, &["init", "--bare"])?;
    let bare_url = bare.to_string_lossy().into_owned();
    git(repo, &["remote", "add", "origin", &bare_url])?;
    git(repo, &["push", "-u", "origin", "main"])?;
    Ok(())
}

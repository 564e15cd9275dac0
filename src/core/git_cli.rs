//! Repository status probing through the `git` command line tool.
//!
//! This module provides [`GitCliDetector`], the default [`RepositoryDetector`].
//! It asks the installed `git` binary three read-only questions:
//!
//! 1. `git status --porcelain`: any output means the working tree is dirty
//! 2. `git rev-parse --abbrev-ref --symbolic-full-name @{u}`: is an upstream configured?
//! 3. `git log --oneline @{u}..`: any output means local commits are not pushed
//!
//! Commands go through the [`CommandRunner`] seam so the probe logic can be
//! exercised without a real `git`. [`ProcessRunner`] is the real runner; it
//! bounds every invocation with a timeout.

use crate::core::{
    detector::{has_git_marker, RepositoryDetector},
    error::{Result, ScoutError},
    record::RepoStatus,
};
use std::ffi::OsString;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use wait_timeout::ChildExt;

const STATUS_ARGS: &[&str] = &["status", "--porcelain"];
const UPSTREAM_ARGS: &[&str] = &["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"];
const UNPUSHED_ARGS: &[&str] = &["log", "--oneline", "@{u}.."];

/// Captured result of one external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Best description of a failed run: trimmed stderr, or the exit status
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs a version-control command inside a directory
pub trait CommandRunner {
    /// `Err` means the command could not be run to completion (spawn failure,
    /// timeout). A non-zero exit is still `Ok`.
    fn run(&self, dir: &Path, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs real processes with a per-invocation timeout
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    timeout: Duration,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    fn command_line(&self, args: &[&str]) -> String {
        format!("{} {}", self.program, args.join(" "))
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, dir: &Path, args: &[&str]) -> Result<CommandOutput> {
        let command_line = self.command_line(args);
        log::debug!("Running '{}' in {}", command_line, dir.display());

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(dir)
            // never prompt for credentials, never take the index lock
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GIT_OPTIONAL_LOCKS", "0");
        // only `dir` itself may be the repository, never an enclosing one
        match ceiling_for(dir) {
            Some(ceiling) => {
                command.env("GIT_CEILING_DIRECTORIES", ceiling);
            }
            None => log::debug!("No discovery ceiling for {}", dir.display()),
        }

        let started = Instant::now();
        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ScoutError::probe_invocation(&command_line, e.to_string()))?;

        // drain both pipes while waiting so a full pipe cannot stall the child
        let (sender, receiver) = mpsc::channel();
        spawn_reader(child.stdout.take(), Stream::Stdout, sender.clone());
        spawn_reader(child.stderr.take(), Stream::Stderr, sender);

        match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => {
                // a descendant may still hold the pipes open after the child exits
                let remaining = self.timeout.saturating_sub(started.elapsed());
                let Some((stdout, stderr)) = collect_output(&receiver, remaining) else {
                    log::warn!(
                        "Output of '{}' in {} still open after {}s",
                        command_line,
                        dir.display(),
                        self.timeout.as_secs()
                    );
                    return Err(ScoutError::probe_timeout(
                        command_line,
                        self.timeout.as_secs(),
                    ));
                };
                let output = CommandOutput {
                    code: status.code(),
                    stdout,
                    stderr,
                };
                log::debug!("'{}' exited with {:?}", command_line, output.code);
                Ok(output)
            }
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                log::warn!(
                    "'{}' in {} timed out after {}s",
                    command_line,
                    dir.display(),
                    self.timeout.as_secs()
                );
                Err(ScoutError::probe_timeout(
                    command_line,
                    self.timeout.as_secs(),
                ))
            }
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                Err(ScoutError::probe_invocation(command_line, e.to_string()))
            }
        }
    }
}

/// `GIT_CEILING_DIRECTORIES` value for probing `dir`, or `None` when the
/// parent cannot be expressed as a single list entry
fn ceiling_for(dir: &Path) -> Option<OsString> {
    let parent = dir.parent()?;
    std::env::join_paths([parent]).ok()
}

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

fn spawn_reader<R>(pipe: Option<R>, stream: Stream, sender: Sender<(Stream, Vec<u8>)>)
where
    R: Read + Send + 'static,
{
    let Some(mut pipe) = pipe else {
        let _ = sender.send((stream, Vec::new()));
        return;
    };
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buffer) {
            log::debug!("Failed to read child output: {e}");
        }
        // the receiver is gone once the run gave up waiting
        let _ = sender.send((stream, buffer));
    });
}

/// Wait at most `limit` for both pipes to reach end of file
fn collect_output(
    receiver: &Receiver<(Stream, Vec<u8>)>,
    limit: Duration,
) -> Option<(String, String)> {
    let deadline = Instant::now() + limit;
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();

    for _ in 0..2 {
        let left = deadline.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(left).ok()? {
            (Stream::Stdout, bytes) => stdout = bytes,
            (Stream::Stderr, bytes) => stderr = bytes,
        }
    }

    Some((
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&stderr).into_owned(),
    ))
}

/// Git detector backed by the `git` binary
pub struct GitCliDetector<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitCliDetector<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// `Ok(false)` when no upstream is configured, which is a normal state
    fn has_unpushed(&self, root: &Path) -> std::result::Result<bool, String> {
        let upstream = self
            .runner
            .run(root, UPSTREAM_ARGS)
            .map_err(|e| e.to_string())?;
        if !upstream.success() {
            log::debug!("No upstream configured for {}", root.display());
            return Ok(false);
        }

        let log = self
            .runner
            .run(root, UNPUSHED_ARGS)
            .map_err(|e| e.to_string())?;
        if !log.success() {
            return Err(log.diagnostic());
        }
        Ok(!log.stdout.trim().is_empty())
    }
}

impl<R: CommandRunner> RepositoryDetector for GitCliDetector<R> {
    fn name(&self) -> &str {
        "git"
    }

    fn detect_marker(&self, dir: &Path) -> bool {
        has_git_marker(dir)
    }

    fn probe(&self, root: &Path) -> RepoStatus {
        let porcelain = match self.runner.run(root, STATUS_ARGS) {
            Ok(output) if output.success() => output,
            Ok(output) => return RepoStatus::failed(output.diagnostic()),
            Err(e) => return RepoStatus::failed(e.to_string()),
        };

        let mut status = RepoStatus {
            is_dirty: !porcelain.stdout.trim().is_empty(),
            ..RepoStatus::default()
        };

        match self.has_unpushed(root) {
            Ok(unpushed) => status.has_unpushed = unpushed,
            Err(message) => status.set_error(message),
        }

        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// Replays canned results in order and records the calls made
    struct ScriptedRunner {
        responses: RefCell<VecDeque<Result<CommandOutput>>>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl ScriptedRunner {
        fn new(responses: Vec<Result<CommandOutput>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl CommandRunner for &ScriptedRunner {
        fn run(&self, _dir: &Path, args: &[&str]) -> Result<CommandOutput> {
            self.calls
                .borrow_mut()
                .push(args.iter().map(|a| a.to_string()).collect());
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected extra command")
        }
    }

    fn ok(stdout: &str) -> Result<CommandOutput> {
        Ok(CommandOutput {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    fn exit(code: i32, stderr: &str) -> Result<CommandOutput> {
        Ok(CommandOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    fn root() -> PathBuf {
        PathBuf::from("/work/repo")
    }

    #[test]
    fn test_clean_without_upstream() {
        let runner = ScriptedRunner::new(vec![
            ok(""),
            exit(128, "fatal: no upstream configured for branch 'main'"),
        ]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert_eq!(status, RepoStatus::clean());
        assert_eq!(runner.call_count(), 2);
    }

    #[test]
    fn test_dirty_without_upstream() {
        let runner = ScriptedRunner::new(vec![ok(" M main.py\n"), exit(128, "")]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert!(status.is_dirty);
        assert!(!status.has_unpushed);
        assert!(status.error.is_none());
    }

    #[test]
    fn test_whitespace_only_status_is_clean() {
        let runner = ScriptedRunner::new(vec![ok("\n  \n"), exit(128, "")]);
        let status = GitCliDetector::new(&runner).probe(&root());
        assert!(!status.is_dirty);
    }

    #[test]
    fn test_unpushed_with_upstream() {
        let runner = ScriptedRunner::new(vec![
            ok(""),
            ok("origin/main\n"),
            ok("abc1234 Local work\n"),
        ]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert!(!status.is_dirty);
        assert!(status.has_unpushed);
        assert_eq!(runner.call_count(), 3);
        assert_eq!(runner.calls.borrow()[2], vec!["log", "--oneline", "@{u}.."]);
    }

    #[test]
    fn test_unpushed_reported_regardless_of_dirty() {
        let runner = ScriptedRunner::new(vec![
            ok("?? new.txt\n"),
            ok("origin/main\n"),
            ok("abc1234 Local work\n"),
        ]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert!(status.is_dirty);
        assert!(status.has_unpushed);
    }

    #[test]
    fn test_up_to_date_with_upstream() {
        let runner = ScriptedRunner::new(vec![ok(""), ok("origin/main\n"), ok("")]);
        let status = GitCliDetector::new(&runner).probe(&root());
        assert_eq!(status, RepoStatus::clean());
    }

    #[test]
    fn test_status_failure_is_recorded_and_stops_probe() {
        let runner = ScriptedRunner::new(vec![exit(128, "fatal: not a git repository\n")]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert_eq!(status.error.as_deref(), Some("fatal: not a git repository"));
        assert!(!status.is_dirty);
        assert!(!status.has_unpushed);
        assert_eq!(runner.call_count(), 1);
    }

    #[test]
    fn test_status_failure_without_stderr() {
        let runner = ScriptedRunner::new(vec![exit(1, "")]);
        let status = GitCliDetector::new(&runner).probe(&root());
        assert_eq!(status.error.as_deref(), Some("exited with status 1"));
    }

    #[test]
    fn test_invocation_error_is_folded() {
        let runner = ScriptedRunner::new(vec![Err(ScoutError::probe_invocation(
            "git status --porcelain",
            "No such file or directory",
        ))]);
        let status = GitCliDetector::new(&runner).probe(&root());

        let message = status.error.expect("error expected");
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_log_failure_keeps_dirty_flag() {
        let runner = ScriptedRunner::new(vec![
            ok(" M lib.rs\n"),
            ok("origin/main\n"),
            exit(128, "fatal: bad revision"),
        ]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert!(status.is_dirty);
        assert!(!status.has_unpushed);
        assert_eq!(status.error.as_deref(), Some("fatal: bad revision"));
    }

    #[test]
    fn test_timeout_on_upstream_check_is_an_error() {
        let runner = ScriptedRunner::new(vec![
            ok(""),
            Err(ScoutError::probe_timeout("git rev-parse", 3)),
        ]);
        let status = GitCliDetector::new(&runner).probe(&root());
        assert!(status.error.unwrap_or_default().contains("timed out"));
    }

    #[test]
    fn test_command_output_diagnostic() {
        let killed = CommandOutput {
            code: None,
            ..CommandOutput::default()
        };
        assert_eq!(killed.diagnostic(), "terminated by signal");
        assert!(!killed.success());
    }

    #[test]
    fn test_process_runner_missing_program() {
        let runner = ProcessRunner::new("definitely-not-a-real-git-binary", Duration::from_secs(5));
        let result = runner.run(Path::new("."), &["status"]);
        assert!(matches!(result, Err(ScoutError::ProbeInvocation { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_captures_output() -> anyhow::Result<()> {
        let runner = ProcessRunner::new("sh", Duration::from_secs(5));
        let output = runner.run(Path::new("."), &["-c", "echo out; echo err >&2; exit 3"])?;

        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_times_out() {
        let runner = ProcessRunner::new("sleep", Duration::from_millis(200));
        let result = runner.run(Path::new("."), &["5"]);
        assert!(matches!(result, Err(ScoutError::ProbeTimeout { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_runner_bounds_descendant_holding_pipes() {
        let runner = ProcessRunner::new("sh", Duration::from_secs(1));
        let started = Instant::now();
        let result = runner.run(Path::new("."), &["-c", "sleep 6 & echo started"]);
        let elapsed = started.elapsed();

        assert!(matches!(result, Err(ScoutError::ProbeTimeout { .. })));
        assert!(elapsed < Duration::from_secs(3), "run took {elapsed:?}");
    }

    #[test]
    fn test_multiline_stderr_stays_on_one_line() {
        let runner = ScriptedRunner::new(vec![exit(
            128,
            "fatal: detected dubious ownership\nhint: run git config --global\n",
        )]);
        let status = GitCliDetector::new(&runner).probe(&root());

        assert_eq!(
            status.error.as_deref(),
            Some("fatal: detected dubious ownership; hint: run git config --global")
        );
    }

    #[test]
    fn test_ceiling_is_the_parent_directory() {
        assert_eq!(
            ceiling_for(Path::new("/work/repo")),
            Some(OsString::from("/work"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_no_ceiling_when_parent_contains_separator() {
        assert_eq!(ceiling_for(Path::new("/work/a:b/repo")), None);
        assert_eq!(ceiling_for(Path::new("/")), None);
    }
}

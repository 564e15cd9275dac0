//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ScoutError`] which covers every failure mode of a scan.
//! Most of them never reach the caller: probe failures are folded into the
//! repository record and unreadable directories are skipped. Only an invalid
//! scan root, configuration problems and output failures propagate.
//!
//! # Public API
//! - [`ScoutError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ScoutError>`
//!
//! # Error Categories
//! - **Root validation**: Scan root missing or not a directory (fatal)
//! - **Traversal**: A directory could not be listed (contained)
//! - **Probing**: A version-control query could not run or timed out (contained)
//! - **Configuration**: Config file unreadable or malformed

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-scout
#[derive(Error, Debug)]
pub enum ScoutError {
    // Scan root errors
    #[error("Directory '{}' not found.", .path.display())]
    InvalidRoot { path: PathBuf },

    // Traversal errors
    #[error("Cannot read directory '{}': {source}", .path.display())]
    TraversalAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    // Probe errors
    #[error("Failed to run '{command}': {message}")]
    ProbeInvocation { command: String, message: String },

    #[error("'{command}' timed out after {seconds}s")]
    ProbeTimeout { command: String, seconds: u64 },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    // Configuration errors
    #[error("Failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ScoutError
pub type Result<T> = std::result::Result<T, ScoutError>;

impl ScoutError {
    /// Create an invalid scan root error
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot { path: path.into() }
    }

    /// Create a traversal access error
    pub fn traversal_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::TraversalAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a probe invocation error
    pub fn probe_invocation(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProbeInvocation {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a probe timeout error
    pub fn probe_timeout(command: impl Into<String>, seconds: u64) -> Self {
        Self::ProbeTimeout {
            command: command.into(),
            seconds,
        }
    }

    /// Create a config read error
    pub fn config_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse error
    pub fn config_parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParse {
            path: path.into(),
            source,
        }
    }
}

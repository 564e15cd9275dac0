//! User configuration.
//!
//! Settings are read from `config.json` in the git-scout config directory
//! (see [`get_config_directory`]). The file is optional and never written;
//! every field falls back to its default when absent.
//!
//! ```json
//! {
//!   "extensions": [".rs", ".py", ".md"],
//!   "probe_timeout_secs": 10,
//!   "backend": "git",
//!   "git_program": "git"
//! }
//! ```

use crate::core::{
    dirs::get_config_directory,
    error::{Result, ScoutError},
    extensions::{SourceExtensions, DEFAULT_EXTENSIONS},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// How repository status is probed
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Run the `git` binary
    #[default]
    Git,
    /// Use libgit2 in-process
    Libgit2,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScoutConfig {
    pub extensions: Vec<String>,
    pub probe_timeout_secs: u64,
    pub backend: Backend,
    pub git_program: String,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            probe_timeout_secs: DEFAULT_PROBE_TIMEOUT_SECS,
            backend: Backend::Git,
            git_program: "git".to_string(),
        }
    }
}

impl ScoutConfig {
    pub fn config_file() -> Result<PathBuf> {
        Ok(get_config_directory()?.join(CONFIG_FILE_NAME))
    }

    /// Load the user configuration, or defaults when there is none
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        log::debug!("Loading config from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| ScoutError::config_read(path, e))?;
        serde_json::from_str(&content).map_err(|e| ScoutError::config_parse(path, e))
    }

    pub fn source_extensions(&self) -> SourceExtensions {
        SourceExtensions::from_list(&self.extensions)
    }

    /// Per-invocation timeout; zero is raised to one second
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs.max(1))
    }
}

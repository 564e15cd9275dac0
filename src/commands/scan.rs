use crate::core::{
    classifier::TreeClassifier,
    config::{Backend, ScoutConfig},
    detector::detectors_for,
    error::{Result, ScoutError},
    output::print_info,
    record::ScanResult,
    report::{render_json, render_report, ReportOptions},
};
use std::path::{Path, PathBuf};

/// Options of one `git-scout` run, already parsed from the command line
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub path: PathBuf,
    pub verbose: bool,
    pub json: bool,
    pub backend: Option<Backend>,
    pub timeout_secs: Option<u64>,
}

impl ScanArgs {
    /// Command line values take precedence over the config file
    pub fn apply_to(&self, mut config: ScoutConfig) -> ScoutConfig {
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(timeout) = self.timeout_secs {
            config.probe_timeout_secs = timeout;
        }
        config
    }
}

/// Check that `path` is an existing directory and make it absolute
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(ScoutError::invalid_root(path));
    }
    std::fs::canonicalize(path).map_err(|_| ScoutError::invalid_root(path))
}

/// Scan `root` with the given configuration
pub fn scan_workspace(root: &Path, config: &ScoutConfig) -> ScanResult {
    log::debug!(
        "Scanning {} with the {:?} backend, {}s probe timeout",
        root.display(),
        config.backend,
        config.probe_timeout().as_secs()
    );
    let classifier = TreeClassifier::new(detectors_for(config), config.source_extensions());
    classifier.scan(root)
}

pub fn execute_scan(args: &ScanArgs, config: ScoutConfig) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let config = args.apply_to(config);

    let result = scan_workspace(&root, &config);

    if args.json {
        print_info(&render_json(&result, &root)?);
    } else {
        let options = ReportOptions {
            verbose: args.verbose,
        };
        print!("{}", render_report(&result, &root, &options));
    }

    Ok(())
}

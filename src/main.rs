use anyhow::Context;
use clap::Parser;
use git_scout::commands::scan::{execute_scan, resolve_root, ScanArgs};
use git_scout::core::{
    config::{Backend, ScoutConfig},
    output::{print_error, set_color_enabled},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-scout")]
#[command(about = "Find dirty and unpushed git repositories and code that was never put under version control")]
#[command(version)]
struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show absolute paths, backends and a summary
    #[arg(long)]
    verbose: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// How repository status is probed
    #[arg(long, value_enum)]
    backend: Option<Backend>,

    /// Timeout in seconds for each git invocation
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn scan_args(&self) -> ScanArgs {
        ScanArgs {
            path: self.path.clone(),
            verbose: self.verbose,
            json: self.json,
            backend: self.backend,
            timeout_secs: self.timeout,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG, when set, wins over --debug
    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if cli.no_color {
        set_color_enabled(false);
    }

    if let Err(e) = run(&cli) {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let args = cli.scan_args();
    // reject a bad root before touching anything else
    resolve_root(&args.path)?;

    let config = ScoutConfig::load().context("Failed to load configuration")?;
    execute_scan(&args, config)?;
    Ok(())
}

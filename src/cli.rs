//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use crate::commands;
use making_of::HookPolicy;
use making_of::config::ConfigOverrides;
use making_of::output::OutputMode;

/// making-of - Archive every commit for a making-of viewer
#[derive(Parser, Debug)]
#[command(
    name = "making-of",
    version,
    about = "Archive every commit of a git history for a making-of viewer",
    long_about = "Walks the git history oldest-first and extracts every commit's tree into\n\
                  making-of/commits/<hash>/, running build.sh there when present.\n\n\
                  The commit timeline (hash, date, title, parsed body) is written to\n\
                  making-of/source/commits.js as `var commits = [...];`."
)]
pub struct Cli {
    /// Repository to build (any path inside the work tree)
    #[arg(short = 'C', long, default_value = ".")]
    pub repo: PathBuf,

    /// Archive root, relative to the repository root
    #[arg(long)]
    pub archive_dir: Option<PathBuf>,

    /// Timeline output file, relative to the repository root
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// JavaScript variable the commit array is assigned to
    #[arg(long)]
    pub variable: Option<String>,

    /// What a failing build hook does: ignore, fail, skip
    #[arg(long)]
    pub hooks: Option<HookPolicy>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the run summary as JSON (machine-readable)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Config overrides given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            archive_dir: self.archive_dir.clone(),
            output: self.output.clone(),
            variable: self.variable.clone(),
            hook_script: None,
            hooks: self.hooks,
        }
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::build(&cli.repo, cli.overrides(), output_mode)
}

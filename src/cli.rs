//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rplint",
    version,
    about = "Lint containerized R analysis projects",
    long_about = "rplint checks that an R analysis project follows the container conventions: required files, Dockerfile base image and labels, rpackages.txt format, and the conda environment.yml.\n\nConfiguration precedence: CLI > rplint.toml > defaults.",
    after_help = "Examples:\n  rplint lint ./ranalyses-QTEST\n  rplint lint --output json --strict\n  rplint conventions --config ci/rplint.toml",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue, help = "Disable logging")]
    pub quiet: bool,
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current rplint version."
    )]
    Version,
    /// Lint a project directory
    #[command(
        about = "Run lint checks",
        long_about = "Check a project directory against the R container conventions. Exits 1 when any check fails (or warns, with --strict) and 2 on unreadable input.",
        after_help = "Examples:\n  rplint lint\n  rplint lint path/to/project --output json"
    )]
    Lint {
        #[arg(help = "Project directory (default: current dir)")]
        project: Option<String>,
        #[arg(long, help = "Path to rplint.toml|yaml (default: discovered)")]
        config: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Treat warnings as failures for the exit status")]
        strict: bool,
    },
    /// Print the effective conventions
    #[command(
        about = "Show effective conventions",
        long_about = "Print the convention tables after applying rplint.toml overrides, as TOML."
    )]
    Conventions {
        #[arg(help = "Project directory (default: current dir)")]
        project: Option<String>,
        #[arg(long, help = "Path to rplint.toml|yaml (default: discovered)")]
        config: Option<String>,
    },
}

impl Cli {
    /// Initialize logging based on verbosity level.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

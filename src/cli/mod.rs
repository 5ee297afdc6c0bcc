//! Command-line interface for ymerge
//!
//! Provides `merge`, `apply`, and `get` subcommands plus shell completion
//! generation.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod apply;
mod get;
mod merge;
mod utils;

/// Selectively merge YAML documents guided by dot-path key patterns
#[derive(Parser)]
#[command(name = "ymerge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a candidate document into a baseline along key patterns
    Merge(merge::MergeArgs),

    /// Merge a candidate document into a file on disk, creating it if missing
    Apply(apply::ApplyArgs),

    /// Extract a value from a document by dotted path
    Get(get::GetArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Merge(args) => merge::run(args),
        Commands::Apply(args) => apply::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ymerge", &mut std::io::stdout());
            Ok(())
        }
    }
}

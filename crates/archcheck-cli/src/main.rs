//! archcheck CLI tool.
//!
//! Usage:
//! ```bash
//! archcheck check [OPTIONS] [PATHS...]
//! archcheck ui [OPTIONS] [PATHS...]
//! archcheck boundary --zone NAME [OPTIONS] [PATHS...]
//! archcheck list-rules
//! archcheck init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use archcheck::Scope;

mod commands;
mod config_resolver;

/// Architecture-conformance checks for TSX frontends
#[derive(Parser)]
#[command(name = "archcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run composition rules and the boundary scan
    Check {
        /// Files or directories to check
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated ids or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Composition worker threads
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Report every forbidden token instead of stopping at the first
        #[arg(long)]
        exhaustive: bool,
    },

    /// Run composition rules only
    Ui {
        /// Files or directories to check
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated ids or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Composition worker threads
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Scan files of one zone for forbidden tokens
    Boundary {
        /// Zone whose forbidden list applies to every file
        #[arg(long)]
        zone: String,

        /// Files or directories to scan
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Report every forbidden token instead of stopping at the first
        #[arg(long)]
        exhaustive: bool,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for check results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One tagged line per violation on stderr.
    #[default]
    Text,
    /// JSON report on stdout.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Check {
            paths,
            format,
            rules,
            jobs,
            exhaustive,
        } => commands::check::run(
            &commands::check::CheckArgs {
                paths,
                format,
                rules,
                jobs,
                exhaustive,
                scope: Scope::All,
                zone: None,
            },
            config,
        ),
        Commands::Ui {
            paths,
            format,
            rules,
            jobs,
        } => commands::check::run(
            &commands::check::CheckArgs {
                paths,
                format,
                rules,
                jobs,
                exhaustive: false,
                scope: Scope::Composition,
                zone: None,
            },
            config,
        ),
        Commands::Boundary {
            zone,
            paths,
            format,
            exhaustive,
        } => commands::check::run(
            &commands::check::CheckArgs {
                paths,
                format,
                rules: None,
                jobs: None,
                exhaustive,
                scope: Scope::Boundary,
                zone: Some(zone),
            },
            config,
        ),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}

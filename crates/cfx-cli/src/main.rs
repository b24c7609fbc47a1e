//! # cfx CLI entry point
//!
//! Parses command-line arguments, resolves configuration, loads the
//! framework catalog and dispatches to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cfx_catalog::Catalog;
use cfx_cli::checklist::{run_checklist, ChecklistArgs};
use cfx_cli::config::CliConfig;
use cfx_cli::list::{run_list, ListArgs};
use cfx_cli::show::{run_show, ShowArgs};

/// Compliance framework catalog and checklist tool.
///
/// Browses a directory of framework documents (YAML or JSON) and replays
/// checklist sessions over them: toggling controls, adding custom controls
/// and reporting grouped progress.
#[derive(Parser, Debug)]
#[command(name = "cfx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory of framework documents.
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List, search and sort the framework library.
    List(ListArgs),

    /// Show one framework and its grouped controls.
    Show(ShowArgs),

    /// Replay toggles and custom controls against a fresh checklist.
    Checklist(ChecklistArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "cfx starting");

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let file_config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let config = file_config.resolve(cli.catalog_dir)?;
    tracing::debug!(catalog_dir = %config.catalog_dir.display(), "resolved catalog directory");

    let catalog = Catalog::load_dir(&config.catalog_dir)
        .with_context(|| format!("failed to load catalog from {}", config.catalog_dir.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let code = match cli.command {
        Commands::List(args) => run_list(&args, &catalog, &mut out),
        Commands::Show(args) => run_show(&args, &catalog, &mut out),
        Commands::Checklist(args) => run_checklist(&args, &catalog, config.session, &mut out),
    }?;
    out.flush()?;
    Ok(code)
}

//! # gzpack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the gzpack CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and applying command-line overrides
//! - Routing execution to the appropriate command handler
//! - Reporting failures through the diagnostics sink
//!
//! ## Examples
//!
//! ```bash
//! # Pack files into a named archive
//! gzpack archive backup.gz notes.txt photo.png
//!
//! # Restore them
//! gzpack unarchive backup.gz restored/
//!
//! # Let gzpack pick the mode and the output name
//! gzpack notes.txt photo.png
//! gzpack -v archive_19-10-2026-14-03-12
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration, apply `--level` / `--error-log`
//! 4. Route to the command handler
//! 5. On failure, write the diagnostics file and exit with status 1
//!
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Handlers for each subcommand
mod common; // The archive format and filesystem helpers
mod core; // Errors, configuration, diagnostics, naming

use crate::commands::CommandContext;
use crate::core::config::{self, AppInfo, Config};
use crate::core::diagnostics::DiagnosticsSink;
use crate::core::error::{kind_of, GzpackError, Result};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "gzpack",
    about = "Pack files into a single gzip archive and restore them",
    long_about = "Pack files into a single gzip-compressed archive, list it, and restore it.\n\
                  Called with plain paths and no subcommand, gzpack archives regular files\n\
                  or extracts a single archive, choosing the output name itself.",
    propagate_version = true,
    arg_required_else_help = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Gzip compression level (0-9), overriding the configured value.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(0..=9))]
    level: Option<u32>,
    /// File receiving the error report on failure, overriding the configured path.
    #[arg(long, global = true, value_name = "PATH")]
    error_log: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    Archive(commands::archive::ArchiveArgs),
    Unarchive(commands::unarchive::UnarchiveArgs),
    #[command(alias = "ls")]
    List(commands::list::ListArgs),
    Cat(commands::cat::CatArgs),
    /// Print the version and project URL.
    Info,
    /// Paths given without a subcommand.
    #[command(external_subcommand)]
    Implicit(Vec<OsString>),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = match config::load_config() {
        Ok(config) => apply_overrides(config, &cli),
        Err(e) => {
            // The configured sink is unknown; fall back to the default one.
            let fallback = apply_overrides(Config::default(), &cli);
            exit_with(&DiagnosticsSink::from_config(&fallback.diagnostics), e);
        }
    };
    let sink = DiagnosticsSink::from_config(&config.diagnostics);
    let ctx = CommandContext::from_config(&config, AppInfo::current());

    if let Err(e) = run(cli.command, &ctx) {
        exit_with(&sink, e);
    }
}

fn run(command: Option<Commands>, ctx: &CommandContext) -> Result<()> {
    match command {
        Some(Commands::Archive(args)) => commands::archive::handle_archive(args, ctx),
        Some(Commands::Unarchive(args)) => commands::unarchive::handle_unarchive(args),
        Some(Commands::List(args)) => commands::list::handle_list(args),
        Some(Commands::Cat(args)) => commands::cat::handle_cat(args),
        Some(Commands::Info) => commands::info::handle_info(&ctx.app),
        Some(Commands::Implicit(paths)) => commands::implicit::handle_implicit(paths, ctx),
        // `arg_required_else_help` prints help before we get here.
        None => anyhow::bail!(GzpackError::ArgumentParsing(
            "no command or paths given".to_string()
        )),
    }
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(level) = cli.level {
        config.archive.compression_level = level;
    }
    if let Some(path) = &cli.error_log {
        config.diagnostics.error_log = path.to_string_lossy().into_owned();
        config.diagnostics.enabled = true;
    }
    config
}

/// Reports `err` and terminates. Usage mistakes skip the diagnostics file.
fn exit_with(sink: &DiagnosticsSink, err: anyhow::Error) -> ! {
    tracing::error!("Command execution failed: {:?}", err);
    if matches!(kind_of(&err), Some(GzpackError::ArgumentParsing(_))) {
        DiagnosticsSink::disabled().report(&err);
        std::process::exit(2);
    }
    sink.report(&err);
    std::process::exit(1);
}

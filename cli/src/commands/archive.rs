//! # gzpack Archive Command
//!
//! File: cli/src/commands/archive.rs
//!
//! ## Overview
//!
//! `gzpack archive <OUTPUT> <FILES>...` packs the given files, in order,
//! into a new archive at `OUTPUT` (truncating any existing file). Only the
//! file names are stored; directory parts of the paths are dropped.
//!
//! ```bash
//! gzpack archive backup.gz notes.txt ~/photos/cat.png
//! ```
//!
use super::CommandContext;
use crate::common::archive::encoder;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Archive Arguments (`ArchiveArgs`)
#[derive(Parser, Debug)]
#[command(about = "Pack one or more files into a new archive")]
pub struct ArchiveArgs {
    /// Path of the archive to create. An existing file is overwritten.
    output: PathBuf,

    /// Files to pack, in the order they should appear in the archive.
    #[arg(required = true, num_args = 1..)]
    files: Vec<PathBuf>,
}

pub fn handle_archive(args: ArchiveArgs, ctx: &CommandContext) -> Result<()> {
    info!(
        "Handling archive command (Output: {:?}, Files: {:?})",
        args.output, args.files
    );
    create_archive(&args.output, &args.files, ctx)
}

/// Encodes `files` into `output` and prints a one-line summary.
///
/// Shared with the implicit invocation, which picks `output` itself.
pub fn create_archive(output: &Path, files: &[PathBuf], ctx: &CommandContext) -> Result<()> {
    let summary = encoder::encode(output, files, ctx.compression)
        .with_context(|| format!("Failed to create archive {}", output.display()))?;
    println!(
        "Created '{}' ({} entries, {} bytes)",
        output.display(),
        summary.entries,
        summary.content_bytes
    );
    Ok(())
}

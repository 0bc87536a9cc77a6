//! # gzpack Unarchive Command
//!
//! File: cli/src/commands/unarchive.rs
//!
//! ## Overview
//!
//! `gzpack unarchive <ARCHIVE> <OUTPUT_DIR>` restores every entry of an
//! archive into `OUTPUT_DIR`, creating the directory if needed. Entries that
//! share a name overwrite each other in archive order. On a malformed
//! archive, files restored before the failure are left in place.
//!
use crate::common::archive::decoder;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// # Unarchive Arguments (`UnarchiveArgs`)
#[derive(Parser, Debug)]
#[command(about = "Restore the files of an archive into a directory")]
pub struct UnarchiveArgs {
    /// Archive to read.
    archive: PathBuf,

    /// Directory to restore into. Created if missing.
    output_dir: PathBuf,
}

pub fn handle_unarchive(args: UnarchiveArgs) -> Result<()> {
    info!(
        "Handling unarchive command (Archive: {:?}, Output: {:?})",
        args.archive, args.output_dir
    );
    extract_archive(&args.archive, &args.output_dir)
}

/// Decodes `archive` into `output_dir` and prints a one-line summary.
pub fn extract_archive(archive: &Path, output_dir: &Path) -> Result<()> {
    let summary = decoder::decode_to_directory(archive, output_dir)
        .with_context(|| format!("Failed to unpack archive {}", archive.display()))?;
    println!(
        "Extracted {} entries ({} bytes) into '{}'",
        summary.entries,
        summary.content_bytes,
        output_dir.display()
    );
    Ok(())
}

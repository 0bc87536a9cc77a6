//! # gzpack List Command
//!
//! File: cli/src/commands/list.rs
//!
//! `gzpack list <ARCHIVE>` prints one `name<TAB>size` line per record, in
//! archive order. Records sharing a name are all shown.
//!
use crate::common::archive::decoder::{self, EntryInfo};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// # List Arguments (`ListArgs`)
#[derive(Parser, Debug)]
#[command(about = "Show the entries of an archive without extracting them")]
pub struct ListArgs {
    /// Archive to read.
    archive: PathBuf,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    info!("Handling list command (Archive: {:?})", args.archive);
    let entries = decoder::list_entries(&args.archive)
        .with_context(|| format!("Failed to list archive {}", args.archive.display()))?;
    print!("{}", render_listing(&entries));
    Ok(())
}

fn render_listing(entries: &[EntryInfo]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\t{}\n", entry.name.to_string_lossy(), entry.size))
        .collect()
}

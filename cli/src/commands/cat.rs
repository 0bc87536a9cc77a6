//! # gzpack Cat Command
//!
//! File: cli/src/commands/cat.rs
//!
//! ## Overview
//!
//! `gzpack cat <ARCHIVE> [NAMES]...` reads an archive into memory and writes
//! entry contents to stdout, without touching the filesystem. Named entries
//! are written in the order given; with no names, every entry is written in
//! name order. When several records share a name, the last one is used.
//!
//! ```bash
//! gzpack cat backup.gz notes.txt | less
//! ```
//!
use crate::common::archive::decoder;
use crate::core::error::{GzpackError, Result};
use anyhow::Context;
use clap::Parser;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Cat Arguments (`CatArgs`)
#[derive(Parser, Debug)]
#[command(about = "Write the contents of archive entries to stdout")]
pub struct CatArgs {
    /// Archive to read.
    archive: PathBuf,

    /// Entries to print. All entries when omitted.
    names: Vec<OsString>,
}

pub fn handle_cat(args: CatArgs) -> Result<()> {
    info!(
        "Handling cat command (Archive: {:?}, Entries: {:?})",
        args.archive, args.names
    );
    let files = decoder::decode_to_mapping(&args.archive)
        .with_context(|| format!("Failed to read archive {}", args.archive.display()))?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, &files, &args.names)?;
    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Writes the contents of `names` (or of every entry when empty) to `out`.
///
/// All names are looked up before anything is written, so a missing entry
/// produces no partial output.
fn write_entries<W: Write>(
    out: &mut W,
    files: &BTreeMap<OsString, Vec<u8>>,
    names: &[OsString],
) -> Result<()> {
    let selected: Vec<&Vec<u8>> = if names.is_empty() {
        files.values().collect()
    } else {
        names
            .iter()
            .map(|name| {
                files.get(name).ok_or_else(|| {
                    anyhow::anyhow!(GzpackError::MissingEntry(
                        name.to_string_lossy().into_owned()
                    ))
                })
            })
            .collect::<Result<_>>()?
    };
    for content in &selected {
        out.write_all(content)
            .context("Failed to write entry contents to stdout")?;
    }
    debug!("Wrote {} entries to stdout", selected.len());
    Ok(())
}

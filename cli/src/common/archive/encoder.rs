//! # gzpack Archive Encoder (`common::archive::encoder`)
//!
//! File: cli/src/common/archive/encoder.rs
//!
//! ## Overview
//!
//! Packs an ordered list of files into one gzip-compressed archive. Each
//! file becomes one record (name line, size line, raw bytes) in the order
//! given. Only the final path component is stored as the entry name, and
//! duplicate names are written as-is.
//!
//! ## Architecture
//!
//! `encode` runs in two phases:
//! 1. Every source is checked (regular file, usable name) before the
//!    destination is touched, so a bad source leaves nothing behind.
//! 2. The destination is created and each source is read whole into memory
//!    and written as a record. A failure here may leave a partial archive on
//!    disk; the stream itself is always closed.
//!
//! `write_archive` does the record writing for any `Write` and is what
//! `encode` feeds once the gzip stream is open.
//!
use crate::common::archive::compression;
use crate::common::archive::record::{self, Entry};
use crate::common::fs::io;
use crate::core::error::{GzpackError, Result};
use anyhow::Context;
use flate2::Compression;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counts reported after an archive is written or read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub entries: usize,
    pub content_bytes: u64,
}

impl ArchiveSummary {
    pub(crate) fn add(&mut self, size: u64) {
        self.entries += 1;
        self.content_bytes += size;
    }
}

/// A source file that passed validation, with its entry name.
#[derive(Debug)]
struct Source {
    path: PathBuf,
    name: OsString,
}

/// Writes `sources` into a new archive at `destination`.
///
/// # Errors
///
/// - `GzpackError::Open` if a source is missing or not a regular file, or the
///   destination cannot be created.
/// - `GzpackError::InvalidEntryName` if a source has no usable file name.
/// - `GzpackError::StreamWrite` if writing the compressed stream fails.
pub fn encode(
    destination: &Path,
    sources: &[PathBuf],
    level: Compression,
) -> Result<ArchiveSummary> {
    let checked = sources
        .iter()
        .map(|path| check_source(path))
        .collect::<Result<Vec<_>>>()?;

    let mut writer = compression::create_gzip_writer(destination, level)?;
    let entries = checked.into_iter().map(|source| {
        let content = io::read_file_bytes(&source.path)?;
        Ok(Entry {
            name: source.name,
            content,
        })
    });
    let summary = write_archive(&mut writer, entries)
        .with_context(|| format!("Failed to write archive {:?}", destination))?;
    compression::finish_gzip_writer(writer)
        .with_context(|| format!("Failed to finalize archive {:?}", destination))?;

    info!(
        "Wrote {} entries ({} bytes) to {:?}",
        summary.entries, summary.content_bytes, destination
    );
    Ok(summary)
}

/// Writes `entries` as consecutive records to `writer`, in order.
///
/// Entries are pulled one at a time, so only the entry being written is held
/// in memory. The first failing entry (source error or invalid name) stops
/// the run; records already written stay in `writer`.
pub fn write_archive<W, I>(writer: &mut W, entries: I) -> Result<ArchiveSummary>
where
    W: Write,
    I: IntoIterator<Item = Result<Entry>>,
{
    let mut summary = ArchiveSummary::default();
    for entry in entries {
        let entry = entry?;
        record::validate_entry_name(&entry.name)?;
        record::write_record(writer, &entry.name, &entry.content)?;
        debug!("Wrote entry {:?} ({} bytes)", entry.name, entry.size());
        summary.add(entry.size());
    }
    Ok(summary)
}

fn check_source(path: &Path) -> Result<Source> {
    let metadata = std::fs::metadata(path).map_err(|source| GzpackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        anyhow::bail!(GzpackError::Open {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
        });
    }
    let name = io::entry_name_for(path)?;
    record::validate_entry_name(&name)
        .with_context(|| format!("Cannot archive {:?}", path))?;
    Ok(Source {
        path: path.to_path_buf(),
        name,
    })
}

//! # gzpack Archive Decoder (`common::archive::decoder`)
//!
//! File: cli/src/common/archive/decoder.rs
//!
//! ## Overview
//!
//! Walks an archive written by the encoder, one record at a time, from the
//! start of the stream to its end. Three consumers share the same record
//! loop (`EntryReader`):
//!
//! - `decode_to_directory` writes each entry to a file in a directory.
//! - `decode_to_mapping` collects entries into a name -> bytes map.
//! - `list_entries` reports names and sizes without keeping the content.
//!
//! Decoding stops at the first malformed record. Entries already extracted
//! before the failure are left on disk. A later entry with the same name as
//! an earlier one replaces it, both on disk and in the map.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::decoder;
//! use std::path::Path;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let files = decoder::decode_to_mapping(Path::new("backup.gz"))?;
//! for (name, content) in &files {
//!     println!("{}: {} bytes", name, content.len());
//! }
//!
//! decoder::decode_to_directory(Path::new("backup.gz"), Path::new("restored"))?;
//! # Ok(())
//! # }
//! ```
//!
use crate::common::archive::compression;
use crate::common::archive::encoder::ArchiveSummary;
use crate::common::archive::record::{self, Entry};
use crate::common::fs::io;
use crate::core::error::{GzpackError, Result};
use anyhow::Context;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io::BufRead;
use std::path::{Component, Path};
use tracing::{debug, info};

/// Name and declared size of one record, as reported by `list_entries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: OsString,
    pub size: u64,
}

/// Sequential reader over the records of an archive stream.
pub struct EntryReader<R> {
    reader: R,
    finished: bool,
}

impl<R: BufRead> EntryReader<R> {
    pub fn new(reader: R) -> Self {
        EntryReader {
            reader,
            finished: false,
        }
    }

    /// Reads the next record, or `None` once the archive has ended.
    ///
    /// After `None` or an error the reader stays finished.
    pub fn next_entry(&mut self) -> Result<Option<Entry>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.read_record();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }

    fn read_record(&mut self) -> Result<Option<Entry>> {
        let Some(name) = record::read_name(&mut self.reader)? else {
            debug!("Reached end of archive");
            return Ok(None);
        };
        let size = record::read_size(&mut self.reader, &name)?;
        let content = record::read_content(&mut self.reader, &name, size)?;
        Ok(Some(Entry { name, content }))
    }
}

impl<R: BufRead> Iterator for EntryReader<R> {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}

/// Opens `source` and returns a reader over its records.
pub fn open(source: &Path) -> Result<EntryReader<compression::GzipReader>> {
    Ok(EntryReader::new(compression::open_gzip_reader(source)?))
}

/// Extracts every entry of `source` into `destination_dir`.
///
/// The directory (and its parents) is created before anything is read.
///
/// # Errors
///
/// - `GzpackError::Open` if the archive cannot be opened.
/// - `GzpackError::Format`, `NameTooLong` or `Truncated` on a malformed record.
/// - `GzpackError::UnsafeEntryName` for names that would escape the directory.
/// - `GzpackError::FileSystem` if the directory or a file cannot be written.
pub fn decode_to_directory(source: &Path, destination_dir: &Path) -> Result<ArchiveSummary> {
    io::ensure_dir_exists(destination_dir)?;
    let mut summary = ArchiveSummary::default();
    for entry in open(source)? {
        let entry = entry.with_context(|| format!("Failed to decode archive {:?}", source))?;
        check_extractable_name(&entry.name)?;
        let target = destination_dir.join(&entry.name);
        io::write_bytes_to_file(&target, &entry.content)?;
        debug!("Extracted {:?} ({} bytes)", entry.name, entry.size());
        summary.add(entry.size());
    }
    info!(
        "Extracted {} entries ({} bytes) from {:?} into {:?}",
        summary.entries, summary.content_bytes, source, destination_dir
    );
    Ok(summary)
}

/// Reads every entry of `source` into memory, keyed by name.
pub fn decode_to_mapping(source: &Path) -> Result<BTreeMap<OsString, Vec<u8>>> {
    let files = collect_mapping(open(source)?)
        .with_context(|| format!("Failed to decode archive {:?}", source))?;
    info!("Decoded {} distinct entries from {:?}", files.len(), source);
    Ok(files)
}

/// Collects the records of any archive stream into a name -> bytes map.
pub fn collect_mapping<R: BufRead>(
    entries: EntryReader<R>,
) -> Result<BTreeMap<OsString, Vec<u8>>> {
    let mut files = BTreeMap::new();
    for entry in entries {
        let entry = entry?;
        if files.insert(entry.name.clone(), entry.content).is_some() {
            debug!("Entry {:?} replaces an earlier entry", entry.name);
        }
    }
    Ok(files)
}

/// Lists the name and size of every record of `source`, in archive order.
///
/// Duplicates are reported as separate records.
pub fn list_entries(source: &Path) -> Result<Vec<EntryInfo>> {
    open(source)?
        .map(|entry| {
            entry.map(|e| EntryInfo {
                size: e.size(),
                name: e.name,
            })
        })
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("Failed to decode archive {:?}", source))
}

/// Accepts only names that are a single ordinary path component.
fn check_extractable_name(name: &OsStr) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => anyhow::bail!(GzpackError::UnsafeEntryName(
            name.to_string_lossy().into_owned()
        )),
    }
}

//! # gzpack Compressed Stream Transport (`common::archive::compression`)
//!
//! File: cli/src/common/archive/compression.rs
//!
//! ## Overview
//!
//! The archive records are framed inside a single gzip stream. This module
//! owns everything gzip-specific so the record, encoder and decoder modules
//! only ever see `Write` and `BufRead` values:
//!
//! - `create_gzip_writer` truncates/creates the destination and wraps it in a
//!   `flate2::write::GzEncoder`.
//! - `open_gzip_reader` opens an existing archive and wraps it in a buffered
//!   `flate2::read::GzDecoder`, which supports both line reads and exact
//!   binary reads.
//! - `looks_like_archive` checks the two-byte gzip magic signature.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::compression;
//! use flate2::Compression;
//! use std::io::Write;
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let mut writer = compression::create_gzip_writer(Path::new("out.gz"), Compression::default())?;
//! writer.write_all(b"payload")?;
//! compression::finish_gzip_writer(writer)?;
//!
//! assert!(compression::looks_like_archive(Path::new("out.gz")));
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{GzpackError, Result};
use anyhow::Context;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// The fixed two-byte signature every gzip stream starts with.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Compressing writer over a buffered destination file.
pub type GzipWriter = GzEncoder<BufWriter<File>>;

/// Decompressing, line-capable reader over an archive file.
pub type GzipReader = BufReader<GzDecoder<File>>;

/// Creates (or truncates) `path` and returns a gzip writer on top of it.
///
/// # Errors
///
/// Returns `GzpackError::Open` if the destination cannot be created.
pub fn create_gzip_writer(path: &Path, level: Compression) -> Result<GzipWriter> {
    let file = File::create(path).map_err(|source| GzpackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {:?} for writing at compression level {}", path, level.level());
    Ok(GzEncoder::new(BufWriter::new(file), level))
}

/// Writes the gzip trailer and flushes everything down to the file.
///
/// Dropping a `GzipWriter` without calling this still closes the file, but
/// any error while writing the trailer is lost.
pub fn finish_gzip_writer(writer: GzipWriter) -> Result<()> {
    let mut inner = writer
        .finish()
        .map_err(|e| GzpackError::StreamWrite(format!("failed to finish gzip stream: {}", e)))?;
    inner
        .flush()
        .map_err(|e| GzpackError::StreamWrite(format!("failed to flush archive file: {}", e)))?;
    Ok(())
}

/// Opens `path` as a gzip-compressed archive for sequential reading.
///
/// # Errors
///
/// Returns `GzpackError::Open` if the file cannot be opened. A file that is
/// not valid gzip is only detected once reading starts.
pub fn open_gzip_reader(path: &Path) -> Result<GzipReader> {
    let file = File::open(path).map_err(|source| GzpackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {:?} for reading", path);
    Ok(BufReader::new(GzDecoder::new(file)))
}

/// Reports whether `path` starts with the gzip magic bytes.
///
/// Never fails: unreadable, missing or too-short files all yield `false`.
/// A `true` result says nothing about whether the records inside are valid.
pub fn looks_like_archive(path: &Path) -> bool {
    match read_magic(path) {
        Ok(magic) => magic == GZIP_MAGIC,
        Err(e) => {
            debug!("Not treating {:?} as an archive: {:#}", path, e);
            false
        }
    }
}

fn read_magic(path: &Path) -> Result<[u8; 2]> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let mut magic = [0u8; 2];
    file.take(2)
        .read_exact(&mut magic)
        .with_context(|| format!("Failed to read signature of {:?}", path))?;
    Ok(magic)
}

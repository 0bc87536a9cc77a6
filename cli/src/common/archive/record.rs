//! # gzpack Record Protocol (`common::archive::record`)
//!
//! File: cli/src/common/archive/record.rs
//!
//! ## Overview
//!
//! An archive is a sequence of records inside one compressed stream:
//!
//! ```text
//! <name>\n
//! <size as decimal digits>\n
//! <exactly size raw bytes>
//! ```
//!
//! There is no header, footer, entry count or checksum. The end of the
//! archive is the end of the stream (or an empty name line).
//!
//! This module holds the helpers shared by the encoder and decoder: writing
//! one record, and reading the name line, size line and content of one
//! record. All reads are bounded so corrupt input cannot trigger unbounded
//! allocation.
//!
use crate::core::error::{GzpackError, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io::{BufRead, Read, Write};

/// Longest accepted name line in bytes, newline included.
pub const MAX_NAME_LINE: usize = 4096;

/// Longest accepted size line in bytes, newline included. `u64::MAX` has 20 digits.
pub const MAX_SIZE_LINE: usize = 32;

/// One archived file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub content: Vec<u8>,
}

impl Entry {
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Returns the bytes stored on the name line for `name`.
///
/// On Unix these are the raw file name bytes, whatever their encoding.
/// Elsewhere the name must be valid Unicode and is stored as UTF-8.
#[cfg(unix)]
fn name_to_bytes(name: &OsStr) -> Result<Cow<'_, [u8]>> {
    use std::os::unix::ffi::OsStrExt;
    Ok(Cow::Borrowed(name.as_bytes()))
}

#[cfg(not(unix))]
fn name_to_bytes(name: &OsStr) -> Result<Cow<'_, [u8]>> {
    match name.to_str() {
        Some(text) => Ok(Cow::Borrowed(text.as_bytes())),
        None => anyhow::bail!(GzpackError::InvalidEntryName(format!(
            "{:?} is not valid Unicode",
            name
        ))),
    }
}

/// Turns the bytes of a name line back into a name.
#[cfg(unix)]
fn name_from_bytes(bytes: Vec<u8>) -> Result<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Ok(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn name_from_bytes(bytes: Vec<u8>) -> Result<OsString> {
    let name = String::from_utf8(bytes)
        .map_err(|_| GzpackError::Format("entry name is not valid UTF-8".to_string()))?;
    Ok(OsString::from(name))
}

/// Checks that `name` can be written as a name line and read back unchanged.
pub fn validate_entry_name(name: &OsStr) -> Result<()> {
    let name = name_to_bytes(name)?;
    if name.is_empty() {
        anyhow::bail!(GzpackError::InvalidEntryName(
            "entry names cannot be empty".to_string()
        ));
    }
    if name.iter().any(|&byte| matches!(byte, b'\n' | b'\r')) {
        anyhow::bail!(GzpackError::InvalidEntryName(format!(
            "{:?} contains a line break",
            String::from_utf8_lossy(&name)
        )));
    }
    // The name line also carries the trailing newline.
    if name.len() + 1 > MAX_NAME_LINE {
        anyhow::bail!(GzpackError::InvalidEntryName(format!(
            "name is {} bytes long, the limit is {}",
            name.len(),
            MAX_NAME_LINE - 1
        )));
    }
    Ok(())
}

/// Writes one complete record. The name must already be validated.
pub fn write_record<W: Write>(writer: &mut W, name: &OsStr, content: &[u8]) -> Result<()> {
    let size_line = format!("\n{}\n", content.len());
    writer
        .write_all(&name_to_bytes(name)?)
        .and_then(|_| writer.write_all(size_line.as_bytes()))
        .and_then(|_| writer.write_all(content))
        .map_err(|e| {
            GzpackError::StreamWrite(format!("failed to write entry {:?}: {}", name, e))
        })?;
    Ok(())
}

/// Reads the next name line.
///
/// Returns `Ok(None)` at the end of the archive: either the stream is
/// exhausted or the line is empty once `\r`/`\n` are stripped.
///
/// # Errors
///
/// - `GzpackError::NameTooLong` if no newline appears within `MAX_NAME_LINE` bytes.
/// - `GzpackError::Format` if the name cannot be represented on this platform.
/// - `GzpackError::StreamRead` if decompression fails.
pub fn read_name<R: BufRead>(reader: &mut R) -> Result<Option<OsString>> {
    let line = match read_bounded_line(reader, MAX_NAME_LINE)? {
        Line::Eof => return Ok(None),
        Line::TooLong => anyhow::bail!(GzpackError::NameTooLong {
            limit: MAX_NAME_LINE
        }),
        Line::Complete(bytes) | Line::Unterminated(bytes) => bytes,
    };
    let name = trim_line_ending(line);
    if name.is_empty() {
        return Ok(None);
    }
    Ok(Some(name_from_bytes(name)?))
}

/// Reads and parses the size line following the name `name`.
///
/// Only ASCII digits are accepted between the start of the line and the
/// line ending.
pub fn read_size<R: BufRead>(reader: &mut R, name: &OsStr) -> Result<u64> {
    let line = match read_bounded_line(reader, MAX_SIZE_LINE)? {
        Line::Eof => anyhow::bail!(GzpackError::Format(format!(
            "entry {:?} has no size line",
            name
        ))),
        Line::TooLong => anyhow::bail!(GzpackError::Format(format!(
            "size line of entry {:?} is too long",
            name
        ))),
        Line::Complete(bytes) => trim_line_ending(bytes),
        Line::Unterminated(_) => anyhow::bail!(GzpackError::Format(format!(
            "size line of entry {:?} is not terminated",
            name
        ))),
    };
    if line.is_empty() || !line.iter().all(u8::is_ascii_digit) {
        anyhow::bail!(GzpackError::Format(format!(
            "invalid size line {:?} for entry {:?}",
            String::from_utf8_lossy(&line),
            name
        )));
    }
    // Digits only, so the lossy conversion is exact; parse can still overflow.
    let digits = String::from_utf8_lossy(&line);
    let size = digits.parse::<u64>().map_err(|_| {
        GzpackError::Format(format!("size {} of entry {:?} is out of range", digits, name))
    })?;
    Ok(size)
}

/// Reads exactly `size` content bytes of entry `name`.
///
/// The buffer grows with the bytes actually received, so a bogus declared
/// size on a short stream fails with `Truncated` instead of allocating it.
pub fn read_content<R: Read>(reader: &mut R, name: &OsStr, size: u64) -> Result<Vec<u8>> {
    let mut content = Vec::new();
    reader
        .take(size)
        .read_to_end(&mut content)
        .map_err(|e| {
            GzpackError::StreamRead(format!("failed to read content of entry {:?}: {}", name, e))
        })?;
    let actual = content.len() as u64;
    if actual != size {
        anyhow::bail!(GzpackError::Truncated {
            name: name.to_string_lossy().into_owned(),
            expected: size,
            actual,
        });
    }
    Ok(content)
}

enum Line {
    Eof,
    Complete(Vec<u8>),
    /// Stream ended before a newline.
    Unterminated(Vec<u8>),
    TooLong,
}

fn read_bounded_line<R: BufRead>(reader: &mut R, limit: usize) -> Result<Line> {
    let mut buf = Vec::new();
    reader
        .take(limit as u64)
        .read_until(b'\n', &mut buf)
        .map_err(|e| GzpackError::StreamRead(format!("failed to read record line: {}", e)))?;
    Ok(match buf.last() {
        None => Line::Eof,
        Some(b'\n') => Line::Complete(buf),
        Some(_) if buf.len() >= limit => Line::TooLong,
        Some(_) => Line::Unterminated(buf),
    })
}

fn trim_line_ending(mut line: Vec<u8>) -> Vec<u8> {
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    line
}

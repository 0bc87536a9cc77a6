//! # gzpack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the filesystem operations the archive core needs,
//! wrapping `std::fs` calls so every failure carries the path involved and
//! maps onto a `GzpackError` kind.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory and its parents if missing, and rejects paths that exist but are not directories.
//! - **`read_file_bytes`**: Reads a whole file into memory. Archive members are buffered whole, so this is the only read path for sources.
//! - **`write_bytes_to_file`**: Creates or truncates a file and writes the given bytes.
//! - **`entry_name_for`**: Derives an entry name from a source path (its final component).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::io;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! io::ensure_dir_exists(Path::new("./restored"))?;
//! let bytes = io::read_file_bytes(Path::new("./notes/todo.txt"))?;
//! io::write_bytes_to_file(Path::new("./restored/todo.txt"), &bytes)?;
//! assert_eq!(io::entry_name_for(Path::new("./notes/todo.txt"))?, "todo.txt");
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{GzpackError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, this function creates the directory,
/// including any necessary parent directories (similar to `mkdir -p`).
///
/// # Errors
///
/// Returns `GzpackError::FileSystem` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| {
            GzpackError::FileSystem(format!("Failed to create directory {:?}: {}", path, e))
        })?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(GzpackError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into memory.
///
/// # Errors
///
/// Returns `GzpackError::Open` if the file cannot be opened or read.
pub fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    let content = fs::read(path).map_err(|source| GzpackError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Writes `content` to `path`, creating or truncating the file.
///
/// The parent directory must already exist.
///
/// # Errors
///
/// Returns `GzpackError::FileSystem` if the file cannot be created or written.
pub fn write_bytes_to_file(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|e| {
        GzpackError::FileSystem(format!("Failed to write file {:?}: {}", path, e))
    })?;
    debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Returns the final component of `path`, which is the name stored in the archive.
///
/// The name is kept as an `OsString` so file names that are not valid UTF-8
/// survive a round trip.
///
/// # Errors
///
/// Returns `GzpackError::InvalidEntryName` if the path has no final component
/// (e.g. `/` or `..`).
pub fn entry_name_for(path: &Path) -> Result<OsString> {
    let file_name = path.file_name().ok_or_else(|| {
        GzpackError::InvalidEntryName(format!("{:?} has no file name component", path))
    })?;
    Ok(file_name.to_os_string())
}

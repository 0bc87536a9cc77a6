//! # gzpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module is the root for the shared building blocks used by the
//! command handlers: the archive format itself and the filesystem helpers it
//! relies on. Command-specific logic lives in `commands::`, infrastructure
//! (errors, configuration, diagnostics) in `core::`.
//!
//! ## Architecture
//!
//! - **`archive`**: The gzip-framed archive format: transport, record protocol, encoder and decoder.
//! - **`fs`**: Filesystem operations (directory creation, whole-file reads and writes, entry naming).
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::{archive, fs};
//! use std::path::{Path, PathBuf};
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! fs::io::ensure_dir_exists(Path::new("./out"))?;
//! archive::encoder::encode(
//!     Path::new("./out/bundle.gz"),
//!     &[PathBuf::from("notes.txt")],
//!     flate2::Compression::default(),
//! )?;
//! let files = archive::decoder::decode_to_mapping(Path::new("./out/bundle.gz"))?;
//! # Ok(())
//! # }
//! ```
//!

/// The archive format: compressed transport, record protocol, encoder and decoder.
pub mod archive;
/// Utilities for filesystem operations used by the archive core.
pub mod fs;

//! # gzpack Archive Format (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module implements the archive format: a gzip stream holding one
//! record per archived file. Each record is the file name on its own line,
//! the content length in decimal on its own line, then exactly that many
//! raw bytes. There is no header, footer, entry count or checksum; the
//! archive ends where the stream ends.
//!
//! ## Architecture
//!
//! - **`compression`**: The gzip transport (`flate2`) and the magic-byte check.
//! - **`record`**: Writing and reading one record, with bounded line reads.
//! - **`encoder`**: Packs source files into a new archive.
//! - **`decoder`**: Walks an archive to a directory, an in-memory map, or a listing.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::archive::{compression, decoder, encoder};
//! use std::path::{Path, PathBuf};
//!
//! # fn run() -> crate::core::error::Result<()> {
//! let archive = Path::new("bundle.gz");
//! encoder::encode(archive, &[PathBuf::from("a.txt")], flate2::Compression::default())?;
//! assert!(compression::looks_like_archive(archive));
//! decoder::decode_to_directory(archive, Path::new("restored"))?;
//! # Ok(())
//! # }
//! ```
//!

pub mod compression;
pub mod decoder;
pub mod encoder;
pub mod record;

//! # gzpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the archive encoder and decoder. Everything
//! currently lives in the `io` submodule; import from it directly, e.g.
//! `use crate::common::fs::io::ensure_dir_exists;`.
//!

/// Basic file I/O (`ensure_dir_exists`, `read_file_bytes`, `write_bytes_to_file`, `entry_name_for`).
pub mod io;

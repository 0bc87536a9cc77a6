//! # gzpack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`archive.rs`,
//! `unarchive.rs`, `implicit.rs`, ...). Each test file declares `mod common;`
//! and is compiled as a separate test crate that runs the `gzpack` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// # Get gzpack Command (`gzpack_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `gzpack` binary. The
/// diagnostics file is pointed into `workdir` and the process runs there, so
/// no test writes into the source tree.
///
/// ## Panics
/// Panics if the `gzpack` binary cannot be found via `Command::cargo_bin`.
pub fn gzpack_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gzpack").expect("Failed to find gzpack binary for testing");
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

/// Writes `files` into `dir` and returns their paths in the same order.
pub fn write_files(dir: &Path, files: &[(&str, &[u8])]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.join(name);
            fs::write(&path, content).expect("Failed to write test input file");
            path
        })
        .collect()
}

/// Gzips `raw` record bytes into `path`, bypassing the encoder, to build
/// malformed archives.
pub fn write_raw_archive(path: &Path, raw: &[u8]) {
    let file = fs::File::create(path).expect("Failed to create raw archive");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(raw).expect("Failed to write raw archive");
    encoder.finish().expect("Failed to finish raw archive");
}

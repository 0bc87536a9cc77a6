//! # gzpack Implicit Invocation
//!
//! File: cli/src/commands/implicit.rs
//!
//! ## Overview
//!
//! `gzpack <PATHS>...` without a subcommand picks the mode from the paths:
//!
//! - A single path starting with the gzip magic bytes is extracted into
//!   `unarchive_<file name>` in the working directory.
//! - Otherwise, if every path is a regular file, they are packed into
//!   `archive_<dd-mm-YYYY-HH-MM-SS>` in the working directory.
//! - Anything else is an argument error.
//!
//! A lone path spelled exactly like a subcommand (`archive`, `unarchive`,
//! `list`, `ls`, `cat`, `info`, `help`) is parsed as that subcommand. Prefix
//! it with `./` to use it as a path.
//!
//! ```bash
//! gzpack report.pdf data.csv     # -> archive_19-10-2026-14-03-12
//! gzpack archive_19-10-2026-14-03-12  # -> unarchive_archive_19-10-2026-14-03-12/
//! gzpack ./list                       # a file named `list`
//! ```
//!
use super::{archive, unarchive, CommandContext};
use crate::common::archive::compression;
use crate::core::error::{GzpackError, Result};
use crate::core::naming;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, info};

/// What an implicit invocation resolves to.
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Archive {
        output: PathBuf,
        sources: Vec<PathBuf>,
    },
    Unarchive {
        archive: PathBuf,
        output_dir: PathBuf,
    },
}

pub fn handle_implicit(raw_paths: Vec<OsString>, ctx: &CommandContext) -> Result<()> {
    let paths: Vec<PathBuf> = raw_paths.into_iter().map(PathBuf::from).collect();
    let mode = detect_mode(&paths, naming::default_archive_name)?;
    info!("Implicit invocation resolved to {:?}", mode);
    match mode {
        Mode::Archive { output, sources } => archive::create_archive(&output, &sources, ctx),
        Mode::Unarchive {
            archive,
            output_dir,
        } => unarchive::extract_archive(&archive, &output_dir),
    }
}

/// Chooses the mode for `paths`. `archive_name` supplies the output name
/// when the paths are to be packed.
pub fn detect_mode(paths: &[PathBuf], archive_name: impl FnOnce() -> PathBuf) -> Result<Mode> {
    if let [single] = paths {
        if compression::looks_like_archive(single) {
            debug!("{:?} starts with the gzip signature", single);
            return Ok(Mode::Unarchive {
                archive: single.clone(),
                output_dir: naming::default_extract_dir(single),
            });
        }
    }
    if !paths.is_empty() && paths.iter().all(|path| path.is_file()) {
        return Ok(Mode::Archive {
            output: archive_name(),
            sources: paths.to_vec(),
        });
    }
    anyhow::bail!(GzpackError::ArgumentParsing(format!(
        "expected existing files to archive or a single archive to extract, got {:?}\n\
         Archive:   gzpack archive <OUTPUT> <FILES>...\n\
         Unarchive: gzpack unarchive <ARCHIVE> <OUTPUT_DIR>",
        paths
    )))
}

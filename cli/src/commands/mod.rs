//! # gzpack Command Modules (`commands`)
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module groups the handlers behind each gzpack subcommand. Handlers
//! are thin: they turn parsed arguments into calls on `common::archive` and
//! print a short human-readable result. Errors are propagated to `main`,
//! which reports them through the diagnostics sink.
//!
//! ## Architecture
//!
//! - `archive`: `gzpack archive <OUTPUT> <FILES>...`
//! - `unarchive`: `gzpack unarchive <ARCHIVE> <OUTPUT_DIR>`
//! - `list`: `gzpack list <ARCHIVE>`
//! - `cat`: `gzpack cat <ARCHIVE> [NAMES]...`
//! - `info`: `gzpack info`
//! - `implicit`: `gzpack <PATHS>...` with the mode chosen from the paths
//!
use crate::core::config::{AppInfo, Config};
use flate2::Compression;

/// Implements `gzpack archive`.
pub mod archive;
/// Implements `gzpack cat`.
pub mod cat;
/// Implements the path-driven invocation without a subcommand.
pub mod implicit;
/// Implements `gzpack info`.
pub mod info;
/// Implements `gzpack list`.
pub mod list;
/// Implements `gzpack unarchive`.
pub mod unarchive;

/// Settings resolved once in `main` and shared by every handler.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub compression: Compression,
    pub app: AppInfo,
}

impl CommandContext {
    pub fn from_config(config: &Config, app: AppInfo) -> Self {
        CommandContext {
            compression: Compression::new(config.archive.compression_level),
            app,
        }
    }
}

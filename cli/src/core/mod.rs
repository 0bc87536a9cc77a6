//! # gzpack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure pieces shared by the archive
//! core and the command handlers.
//!
//! ## Architecture
//!
//! - `config`: Configuration loading, merging, validation and build information
//! - `diagnostics`: Failure report sink used by `main`
//! - `error`: Error kinds and the `Result` alias
//! - `naming`: Default output names for implicit invocations
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{GzpackError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod naming;

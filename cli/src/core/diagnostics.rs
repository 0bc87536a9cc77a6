//! # gzpack Diagnostics Sink
//!
//! File: cli/src/core/diagnostics.rs
//!
//! ## Overview
//!
//! When a command fails, gzpack writes the full error chain to a report file
//! (by default `error.log` in the working directory) and prints a short hint
//! on stderr pointing at it. The sink is an explicit value built from the
//! configuration; there is no process-wide log handle.
//!
use crate::core::config::DiagnosticsConfig;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Destination for failure reports.
#[derive(Debug, Clone)]
pub struct DiagnosticsSink {
    path: Option<PathBuf>,
}

impl DiagnosticsSink {
    pub fn from_config(config: &DiagnosticsConfig) -> Self {
        let path = config
            .enabled
            .then(|| PathBuf::from(&config.error_log));
        DiagnosticsSink { path }
    }

    /// A sink that only reports on stderr.
    pub fn disabled() -> Self {
        DiagnosticsSink { path: None }
    }

    /// Writes `err` (with its causes) to the report file, truncating it.
    ///
    /// Returns the path written, or `None` when the sink is disabled.
    pub fn record(&self, err: &anyhow::Error) -> Result<Option<&Path>> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        fs::write(path, render_report(err))
            .with_context(|| format!("Failed to write diagnostics file {:?}", path))?;
        debug!("Wrote failure report to {:?}", path);
        Ok(Some(path))
    }

    /// Records `err` and prints the user-facing message on stderr.
    pub fn report(&self, err: &anyhow::Error) {
        eprintln!("Error: {}", err);
        match self.record(err) {
            Ok(Some(path)) => eprintln!(
                "An error occurred. Check {} for details.",
                path.display()
            ),
            Ok(None) => {}
            Err(write_err) => warn!("Could not write diagnostics file: {:#}", write_err),
        }
    }
}

/// Formats the error and every cause on its own line.
fn render_report(err: &anyhow::Error) -> String {
    let mut report = format!("{}\n", err);
    for cause in err.chain().skip(1) {
        report.push_str(&format!("  caused by: {}\n", cause));
    }
    report
}

//! # gzpack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error kinds used throughout gzpack. Every failure
//! in the archive core (opening files, writing or reading the compressed
//! stream, malformed records) is reported as one of the `GzpackError`
//! variants, wrapped in an `anyhow::Error` so callers can attach context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `GzpackError`: A custom error enum using `thiserror` for specific error kinds
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error kinds cover:
//! - Open failures (source unreadable, destination unwritable)
//! - Short writes and short reads on the compressed stream
//! - Format violations (bad size line, over-long name line, truncated content)
//! - Filesystem failures during extraction
//! - Lookups of entries the archive does not contain
//! - Configuration and argument errors in the CLI layer
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error kind
//! anyhow::bail!(GzpackError::Format(format!("invalid size line {:?}", line)));
//!
//! // Inspect the kind at the call site
//! match decoder::decode_to_mapping(path) {
//!     Err(e) if matches!(e.downcast_ref::<GzpackError>(), Some(GzpackError::Truncated { .. })) => {
//!         println!("archive is truncated");
//!     }
//!     other => { /* ... */ }
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Error kinds raised by the gzpack archive core and CLI layer.
#[derive(Error, Debug)]
pub enum GzpackError {
    #[error("Failed to open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Compressed stream write failed: {0}")]
    StreamWrite(String),

    #[error("Compressed stream read failed: {0}")]
    StreamRead(String),

    #[error("Malformed archive: {0}")]
    Format(String),

    #[error("Malformed archive: entry name line exceeds {limit} bytes")]
    NameTooLong { limit: usize },

    #[error("Truncated archive: entry '{name}' declares {expected} bytes but only {actual} are present")]
    Truncated {
        name: String,
        expected: u64,
        actual: u64,
    },

    #[error("Invalid entry name: {0}")]
    InvalidEntryName(String),

    #[error("Refusing to extract entry with unsafe name '{0}'")]
    UnsafeEntryName(String),

    #[error("Archive has no entry named '{0}'")]
    MissingEntry(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

/// Returns the `GzpackError` kind carried by an `anyhow::Error`, if any.
///
/// Looks through the whole chain, so kinds wrapped in additional context
/// are still found.
pub fn kind_of(err: &anyhow::Error) -> Option<&GzpackError> {
    err.chain().find_map(|cause| cause.downcast_ref::<GzpackError>())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_error_display() {
        let truncated = GzpackError::Truncated {
            name: "a.txt".into(),
            expected: 10,
            actual: 4,
        };
        assert_eq!(
            truncated.to_string(),
            "Truncated archive: entry 'a.txt' declares 10 bytes but only 4 are present"
        );

        let too_long = GzpackError::NameTooLong { limit: 4096 };
        assert_eq!(
            too_long.to_string(),
            "Malformed archive: entry name line exceeds 4096 bytes"
        );

        let open = GzpackError::Open {
            path: PathBuf::from("missing.bin"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(open.to_string().starts_with("Failed to open 'missing.bin'"));
    }

    #[test]
    fn test_kind_of_finds_wrapped_kind() {
        let result: Result<()> = Err(anyhow::Error::new(GzpackError::Format("bad".into())))
            .context("while decoding archive.gz");
        let err = result.unwrap_err();
        assert!(matches!(kind_of(&err), Some(GzpackError::Format(_))));

        let plain = anyhow::anyhow!("unrelated");
        assert!(kind_of(&plain).is_none());
    }
}

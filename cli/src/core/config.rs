//! # gzpack Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the optional configuration for gzpack and exposes the
//! build-time application information (version, project URL). Configuration
//! only tunes the CLI layer and the compression level; it never changes the
//! archive record format.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.gzpack.toml` in the current directory or ancestors
//! 2. User-specific `config.toml` in the platform configuration directory
//! 3. Default values defined in the code
//!
//! Paths are expanded (`~` to home directory) and the merged result is
//! validated before use. Command-line flags are applied on top by `main`.
//!
//! ## Examples
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let level = cfg.archive.compression_level;
//! let log_path = &cfg.diagnostics.error_log;
//! ```
//!
use crate::core::error::{GzpackError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Static information about this build, handed to the `info` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppInfo {
    pub version: &'static str,
    pub url: &'static str,
}

impl AppInfo {
    /// Information taken from the crate manifest at compile time.
    pub const fn current() -> Self {
        AppInfo {
            version: env!("CARGO_PKG_VERSION"),
            url: env!("CARGO_PKG_REPOSITORY"),
        }
    }
}

/// The resolved configuration: every layer merged, defaults filled in.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Settings applied when writing archives.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveConfig {
    /// Gzip compression level, 0 (store) through 9 (best).
    pub compression_level: u32,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        ArchiveConfig {
            compression_level: default_compression_level(),
        }
    }
}

/// Where failure reports are written.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticsConfig {
    /// File receiving the error report when a command fails (can use ~).
    pub error_log: String,
    /// Set to false to only report failures on stderr.
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        DiagnosticsConfig {
            error_log: default_error_log(),
            enabled: default_diagnostics_enabled(),
        }
    }
}

fn default_compression_level() -> u32 {
    6
}
fn default_error_log() -> String {
    "error.log".to_string()
}
fn default_diagnostics_enabled() -> bool {
    true
}

/// One configuration file as written on disk. Keys left out are `None`, so
/// a lower layer (or the default) can supply them.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    archive: ArchiveSection,
    #[serde(default)]
    diagnostics: DiagnosticsSection,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct ArchiveSection {
    compression_level: Option<u32>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
struct DiagnosticsSection {
    error_log: Option<String>,
    enabled: Option<bool>,
}

const PROJECT_CONFIG_FILENAME: &str = ".gzpack.toml";
const MAX_COMPRESSION_LEVEL: u32 = 9;

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config, project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "gzpack", "gzpack") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.is_file() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.gzpack.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.gzpack.toml`.
/// The search stops at the first directory holding a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Resolves each key from the project file, then the user file, then the default.
fn merge_configs(user: Option<ConfigFile>, project: Option<ConfigFile>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    Config {
        archive: ArchiveConfig {
            compression_level: project
                .archive
                .compression_level
                .or(user.archive.compression_level)
                .unwrap_or_else(default_compression_level),
        },
        diagnostics: DiagnosticsConfig {
            error_log: project
                .diagnostics
                .error_log
                .or(user.diagnostics.error_log)
                .unwrap_or_else(default_error_log),
            enabled: project
                .diagnostics
                .enabled
                .or(user.diagnostics.enabled)
                .unwrap_or_else(default_diagnostics_enabled),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    config.diagnostics.error_log = shellexpand::tilde(&config.diagnostics.error_log).into_owned();
    debug!("Expanded error log path: {}", config.diagnostics.error_log);
}

pub fn validate_config(config: &Config) -> Result<()> {
    if config.archive.compression_level > MAX_COMPRESSION_LEVEL {
        return Err(anyhow!(GzpackError::Config(format!(
            "compression_level must be between 0 and {}, got {}.",
            MAX_COMPRESSION_LEVEL, config.archive.compression_level
        ))));
    }
    if config.diagnostics.enabled && config.diagnostics.error_log.trim().is_empty() {
        return Err(anyhow!(GzpackError::Config(
            "diagnostics.error_log cannot be empty while diagnostics are enabled.".to_string()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(toml_content: &str) -> ConfigFile {
        toml::from_str(toml_content).expect("Failed to parse TOML")
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let file = parse(
            r#"
            [archive]
            compression_level = 9

            [diagnostics]
            error_log = "~/gzpack-errors.log"
        "#,
        );

        assert_eq!(file.archive.compression_level, Some(9));
        assert_eq!(
            file.diagnostics.error_log.as_deref(),
            Some("~/gzpack-errors.log")
        ); // Not yet expanded
        assert_eq!(file.diagnostics.enabled, None); // Left to lower layers
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<ConfigFile, _> =
            toml::from_str("[archive]\nformat = \"zip\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = parse(
            r#"
            [archive]
            compression_level = 1
            [diagnostics]
            error_log = "/var/log/user.log"
        "#,
        );
        let project = parse("[archive]\ncompression_level = 9\n");

        let merged = merge_configs(Some(user), Some(project));
        assert_eq!(merged.archive.compression_level, 9);
        assert_eq!(merged.diagnostics.error_log, "/var/log/user.log");
        assert!(merged.diagnostics.enabled);
    }

    #[test]
    fn test_project_value_equal_to_default_still_overrides_user() {
        let user = parse(
            r#"
            [archive]
            compression_level = 1
            [diagnostics]
            error_log = "/u.log"
            enabled = false
        "#,
        );
        let project = parse(
            r#"
            [archive]
            compression_level = 6
            [diagnostics]
            error_log = "error.log"
            enabled = true
        "#,
        );

        let merged = merge_configs(Some(user), Some(project));
        assert_eq!(merged, Config::default());
    }

    #[test]
    fn test_merge_without_project_keeps_user() {
        let user = parse("[diagnostics]\nenabled = false\n");
        let merged = merge_configs(Some(user), None);
        assert!(!merged.diagnostics.enabled);
        assert_eq!(merged.archive.compression_level, 6);
        assert_eq!(merged.diagnostics.error_log, "error.log");
    }

    #[test]
    fn test_merge_without_files_is_default() {
        assert_eq!(merge_configs(None, None), Config::default());
    }

    #[test]
    fn test_validate_config_rejects_bad_level() {
        let config = Config {
            archive: ArchiveConfig {
                compression_level: 12,
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("compression_level"));
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_find_project_config_in_ancestor() -> Result<()> {
        let root = tempdir()?;
        let nested = root.path().join("a/b");
        fs::create_dir_all(&nested)?;
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "")?;

        let found = find_project_config_path(&nested);
        assert_eq!(found, Some(root.path().join(PROJECT_CONFIG_FILENAME)));
        Ok(())
    }

    #[test]
    fn test_find_project_config_stops_at_git() -> Result<()> {
        let root = tempdir()?;
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "")?;
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git"))?;

        assert_eq!(find_project_config_path(&repo), None);
        Ok(())
    }

    #[test]
    fn test_app_info_matches_manifest() {
        let info = AppInfo::current();
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.url.starts_with("https://"));
    }
}

//! # gzpack Default Output Names
//!
//! File: cli/src/core/naming.rs
//!
//! Names used when the user invokes gzpack without saying where the result
//! should go: `archive_<dd-mm-YYYY-HH-MM-SS>` for new archives and
//! `unarchive_<archive file name>` for extraction directories.
//!
use chrono::{DateTime, Local, TimeZone};
use std::path::{Path, PathBuf};

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y-%H-%M-%S";

/// Default archive file name for the current local time.
pub fn default_archive_name() -> PathBuf {
    archive_name_at(&Local::now())
}

/// Default archive file name for a given instant.
pub fn archive_name_at<Tz: TimeZone>(at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("archive_{}", at.format(TIMESTAMP_FORMAT)))
}

/// Default extraction directory for `archive`, relative to the working directory.
pub fn default_extract_dir(archive: &Path) -> PathBuf {
    let stem = archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "archive".to_string());
    PathBuf::from(format!("unarchive_{}", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_archive_name_format() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();
        assert_eq!(archive_name_at(&at), PathBuf::from("archive_07-03-2024-09-05-02"));
    }

    #[test]
    fn test_extract_dir_uses_file_name_only() {
        assert_eq!(
            default_extract_dir(Path::new("/tmp/backups/photos.gz")),
            PathBuf::from("unarchive_photos.gz")
        );
        assert_eq!(default_extract_dir(Path::new("/")), PathBuf::from("unarchive_archive"));
    }
}

//! # gzpack CLI Archive/Unarchive Integration Tests
//!
//! File: cli/tests/archive.rs
//!
//! ## Overview
//!
//! Round trips through the `archive`, `list` and `unarchive` subcommands,
//! and the failure reporting for bad inputs and malformed archives.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_archive_then_unarchive_round_trip() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir(&src).unwrap();
    let binary: Vec<u8> = (0..=255u8).collect();
    let inputs = write_files(
        &src,
        &[("a.txt", b"hi"), ("b.txt", b""), ("c.bin", binary.as_slice())],
    );

    gzpack_cmd(dir.path())
        .args(["archive", "bundle.gz"])
        .args(&inputs)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 entries"));

    gzpack_cmd(dir.path())
        .args(["unarchive", "bundle.gz", "restored/nested"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted 3 entries"));

    let restored = dir.path().join("restored/nested");
    assert_eq!(fs::read(restored.join("a.txt")).unwrap(), b"hi");
    assert_eq!(fs::read(restored.join("b.txt")).unwrap(), b"");
    assert_eq!(fs::read(restored.join("c.bin")).unwrap(), binary);
    assert!(!restored.join("src").exists());
}

#[test]
fn test_list_shows_entries_in_order() {
    let dir = tempdir().unwrap();
    let inputs = write_files(dir.path(), &[("z.txt", b"last?"), ("a.txt", b"hi")]);

    gzpack_cmd(dir.path())
        .args(["--level", "9", "archive", "bundle.gz"])
        .args(&inputs)
        .assert()
        .success();

    gzpack_cmd(dir.path())
        .args(["list", "bundle.gz"])
        .assert()
        .success()
        .stdout(predicate::eq("z.txt\t5\na.txt\t2\n"));
}

#[test]
fn test_cat_prints_entries_without_extracting() {
    let dir = tempdir().unwrap();
    let inputs = write_files(dir.path(), &[("b.txt", b"bee\n"), ("a.txt", b"ay\n")]);

    gzpack_cmd(dir.path())
        .args(["archive", "bundle.gz"])
        .args(&inputs)
        .assert()
        .success();

    gzpack_cmd(dir.path())
        .args(["cat", "bundle.gz", "b.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("bee\n"));
    gzpack_cmd(dir.path())
        .args(["cat", "bundle.gz"])
        .assert()
        .success()
        .stdout(predicate::eq("ay\nbee\n"));
    gzpack_cmd(dir.path())
        .args(["cat", "bundle.gz", "c.txt"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no entry named 'c.txt'"));
}

#[test]
fn test_duplicate_names_overwrite_on_extract() {
    let dir = tempdir().unwrap();
    for sub in ["one", "two"] {
        fs::create_dir(dir.path().join(sub)).unwrap();
        fs::write(dir.path().join(sub).join("same.txt"), sub).unwrap();
    }

    gzpack_cmd(dir.path())
        .args(["archive", "dup.gz", "one/same.txt", "two/same.txt"])
        .assert()
        .success();
    gzpack_cmd(dir.path())
        .args(["ls", "dup.gz"])
        .assert()
        .success()
        .stdout(predicate::eq("same.txt\t3\nsame.txt\t3\n"));
    gzpack_cmd(dir.path())
        .args(["unarchive", "dup.gz", "out"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(dir.path().join("out/same.txt")).unwrap(), "two");
}

#[test]
fn test_missing_input_reports_and_writes_error_log() {
    let dir = tempdir().unwrap();
    write_files(dir.path(), &[("present.txt", b"ok")]);

    gzpack_cmd(dir.path())
        .args(["archive", "out.gz", "present.txt", "absent.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Failed to create archive"))
        .stderr(predicate::str::contains("error.log"));

    assert!(!dir.path().join("out.gz").exists());
    let report = fs::read_to_string(dir.path().join("error.log")).unwrap();
    assert!(report.contains("absent.txt"));
}

#[test]
fn test_truncated_archive_fails_after_earlier_entries() {
    let dir = tempdir().unwrap();
    write_raw_archive(
        &dir.path().join("cut.gz"),
        b"first.txt\n3\nabcsecond.txt\n50\nshort",
    );

    gzpack_cmd(dir.path())
        .args(["unarchive", "cut.gz", "out"])
        .assert()
        .code(1);

    assert_eq!(fs::read(dir.path().join("out/first.txt")).unwrap(), b"abc");
    assert!(!dir.path().join("out/second.txt").exists());
    let report = fs::read_to_string(dir.path().join("error.log")).unwrap();
    assert!(report.contains("Truncated archive"));
}

#[test]
fn test_malformed_size_line_fails_list() {
    let dir = tempdir().unwrap();
    write_raw_archive(&dir.path().join("bad.gz"), b"name.txt\nnot-a-number\n");

    gzpack_cmd(dir.path())
        .args(["list", "bad.gz"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to list archive"));
}

#[test]
fn test_error_log_override() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("logs.txt");

    gzpack_cmd(dir.path())
        .arg("--error-log")
        .arg(&log)
        .args(["unarchive", "missing.gz", "out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("logs.txt"));

    assert!(log.exists());
    assert!(!dir.path().join("error.log").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_project_config_reenables_diagnostics_disabled_by_user() {
    let dir = tempdir().unwrap();
    let user_config = dir.path().join("xdg/gzpack");
    fs::create_dir_all(&user_config).unwrap();
    fs::write(
        user_config.join("config.toml"),
        "[diagnostics]\nenabled = false\nerror_log = \"user.log\"\n",
    )
    .unwrap();
    let work = dir.path().join("work");
    fs::create_dir(&work).unwrap();
    fs::create_dir(work.join(".git")).unwrap();
    fs::write(
        work.join(".gzpack.toml"),
        "[diagnostics]\nenabled = true\nerror_log = \"error.log\"\n",
    )
    .unwrap();

    gzpack_cmd(&work)
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .args(["unarchive", "missing.gz", "out"])
        .assert()
        .code(1);

    assert!(work.join("error.log").exists());
    assert!(!work.join("user.log").exists());
}

//! Integration tests for editor launching

#![cfg(unix)]
#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::diary_cmd;

/// Write an executable script that records its arguments next to itself
fn recording_editor(dir: &Path, name: &str) -> std::path::PathBuf {
    let script = dir.join(name);
    fs::write(
        &script,
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/opened.txt\"\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn escape_spaces(path: &Path) -> String {
    path.display().to_string().replace(' ', "\\ ")
}

#[test]
fn test_editor_receives_entry_path() {
    let diary = TempDir::new().unwrap();
    let tools = TempDir::new().unwrap();
    let editor = recording_editor(tools.path(), "edit");

    diary_cmd(diary.path())
        .env("DIARY_DIRPATH", diary.path())
        .env("DIARY_EDITOR", format!("{} -w", escape_spaces(&editor)))
        .arg("2024-06-12")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating 2024-06-10.md"));

    let recorded = fs::read_to_string(tools.path().join("opened.txt")).unwrap();
    let entry = diary.path().join("2024-06-10.md");
    assert_eq!(recorded, format!("-w\n{}\n", entry.display()));
}

#[test]
fn test_escaped_space_in_editor_path() {
    let diary = TempDir::new().unwrap();
    let tools = TempDir::new().unwrap();
    let editor = recording_editor(tools.path(), "my editor");

    diary_cmd(diary.path())
        .env("DIARY_DIRPATH", diary.path())
        .env("DIARY_EDITOR", escape_spaces(&editor))
        .arg("2024-06-12")
        .assert()
        .success();

    let recorded = fs::read_to_string(tools.path().join("opened.txt")).unwrap();
    assert!(recorded.ends_with("2024-06-10.md\n"));
}

#[test]
fn test_editor_failure_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    diary_cmd(temp.path())
        .env("DIARY_DIRPATH", temp.path())
        .env("DIARY_EDITOR", "false")
        .arg("2024-06-12")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Editor 'false' exited"));

    // The entry created before launching stays
    assert!(temp.path().join("2024-06-10.md").exists());
}

#[test]
fn test_missing_editor_exits_nonzero() {
    let temp = TempDir::new().unwrap();

    diary_cmd(temp.path())
        .env("DIARY_DIRPATH", temp.path())
        .env("DIARY_EDITOR", "no-such-editor-anywhere")
        .arg("2024-06-12")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Failed to launch editor 'no-such-editor-anywhere'"));
}

#[test]
fn test_print_flag_skips_editor() {
    let temp = TempDir::new().unwrap();

    diary_cmd(temp.path())
        .env("DIARY_DIRPATH", temp.path())
        .env("DIARY_EDITOR", "false")
        .args(["--print", "2024-06-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-10.md"));
}

#[test]
fn test_editor_flag_overrides_environment() {
    let temp = TempDir::new().unwrap();

    diary_cmd(temp.path())
        .env("DIARY_DIRPATH", temp.path())
        .env("DIARY_EDITOR", "false")
        .args(["--editor", "true", "2024-06-12"])
        .assert()
        .success();
}

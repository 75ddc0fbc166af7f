// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;

#[test]
fn missing_destination_is_allowed() {
    let dir = tempdir().unwrap();
    assert!(check_destination(&dir.path().join("restored")).is_ok());
}

#[test]
fn empty_destination_directory_is_allowed() {
    let dir = tempdir().unwrap();
    assert!(check_destination(dir.path()).is_ok());
}

#[test]
fn populated_destination_is_rejected() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("keep.txt"), "data").unwrap();

    let err = check_destination(dir.path()).unwrap_err();

    assert!(err.to_string().contains("exists and is not an empty directory"));
}

#[test]
fn destination_file_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file");
    std::fs::write(&file, "").unwrap();
    assert!(check_destination(&file).is_err());
}

#[test]
fn migrate_requires_existing_path() {
    let dir = tempdir().unwrap();
    let err = migrate(MigrateArgs { directory: dir.path().join("gone") }).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}

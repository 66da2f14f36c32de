use super::*;

use std::fs::{create_dir, write};
use std::time::Duration;

use tempfile::tempdir;

#[test]
fn lists_files_and_directories_with_metadata() {
    let tmp = tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("notes.txt"), b"hello world").expect("write notes.txt");
    create_dir(root.join("docs")).expect("create docs");

    let mut entries = list_dir(root).expect("list_dir");
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(entries.len(), 2);

    let docs = &entries[0];
    assert_eq!(docs.name, "docs");
    assert_eq!(docs.kind, EntryKind::Directory);
    assert_eq!(docs.path, root.join("docs"));

    let notes = &entries[1];
    assert_eq!(notes.name, "notes.txt");
    assert_eq!(notes.kind, EntryKind::File);
    assert_eq!(notes.size, 11);
    assert_eq!(notes.path, root.join("notes.txt"));
    assert!(notes.mtime_secs > 0, "fresh file should carry a recent mtime");
}

#[test]
fn empty_directory_returns_empty_listing() {
    let tmp = tempdir().expect("create temp dir");

    let entries = list_dir(tmp.path()).expect("list_dir on empty dir");
    assert!(entries.is_empty());
}

#[test]
fn missing_path_fails_with_directory_read_error() {
    let tmp = tempdir().expect("create temp dir");
    let missing = tmp.path().join("no-such-dir");

    let err = list_dir(&missing).expect_err("listing a missing path must fail");
    match &err {
        ListError::DirectoryRead { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected DirectoryRead, got {other:?}"),
    }
    assert_eq!(err.path(), missing.as_path());
}

#[test]
fn regular_file_target_fails_with_directory_read_error() {
    let tmp = tempdir().expect("create temp dir");
    let file = tmp.path().join("not-a-dir.txt");
    write(&file, b"x").expect("write file");

    let err = list_dir(&file).expect_err("listing a file must fail");
    assert!(matches!(err, ListError::DirectoryRead { .. }));
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_listed_as_symlink() {
    let tmp = tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("real.txt"), b"ok").expect("write real.txt");
    std::os::unix::fs::symlink(root.join("gone"), root.join("broken"))
        .expect("create dangling symlink");

    let mut entries = list_dir(root).expect("dangling symlink is still a listable entry");
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "broken");
    assert_eq!(entries[0].kind, EntryKind::Symlink);
    assert_eq!(entries[1].name, "real.txt");
    assert_eq!(entries[1].kind, EntryKind::File);
}

#[test]
fn does_not_recurse_into_subdirectories() {
    let tmp = tempdir().expect("create temp dir");
    let root = tmp.path();

    create_dir(root.join("sub")).expect("create sub");
    write(root.join("sub").join("inner.txt"), b"deep").expect("write inner.txt");

    let entries = list_dir(root).expect("list_dir");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "sub");
    assert_eq!(entries[0].kind, EntryKind::Directory);
}

#[test]
fn listing_wider_than_worker_pool_returns_every_child() {
    let tmp = tempdir().expect("create temp dir");
    let root = tmp.path();

    let count = 3 * STAT_WORKERS;
    for i in 0..count {
        write(root.join(format!("f{i:02}.txt")), b"x").expect("write fixture file");
    }

    let entries = list_dir(root).expect("list_dir");
    assert_eq!(entries.len(), count);

    let mut names: Vec<_> = entries.iter().map(|e| e.name.clone()).collect();
    names.sort();
    let expected: Vec<_> = (0..count).map(|i| format!("f{i:02}.txt")).collect();
    assert_eq!(names, expected);
}

#[test]
fn to_unix_secs_handles_none_and_various_times() {
    let cases: &[(Option<SystemTime>, u64)] = &[
        (None, 0),
        (Some(UNIX_EPOCH), 0),
        (Some(UNIX_EPOCH + Duration::from_secs(42)), 42),
        (
            UNIX_EPOCH.checked_sub(Duration::from_secs(1)),
            0, // before epoch => treated as 0
        ),
    ];

    for (input, expected) in cases {
        let got = to_unix_secs(*input);
        assert_eq!(
            got, *expected,
            "to_unix_secs({:?}) should be {}, got {}",
            input, expected, got
        );
    }
}

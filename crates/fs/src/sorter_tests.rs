use super::*;

use std::cmp::Ordering;
use std::path::PathBuf;

use crate::entry::EntryKind;

fn entry(name: &str, kind: EntryKind) -> Entry {
    Entry {
        name: name.to_owned(),
        path: PathBuf::from("/browse").join(name),
        kind,
        size: 0,
        mtime_secs: 0,
    }
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn directories_first_then_alphabetical_ignoring_case_and_dot() {
    let mut entries = vec![
        entry(".git", EntryKind::Directory),
        entry("Readme.md", EntryKind::File),
        entry("lib", EntryKind::Directory),
        entry("app.js", EntryKind::File),
    ];

    sort_entries(&mut entries);

    // ".git" compares as "git", which precedes "lib" among the
    // directories; the files compare case-insensitively.
    assert_eq!(names(&entries), vec![".git", "lib", "app.js", "Readme.md"]);
}

#[test]
fn directories_precede_non_directories_regardless_of_name() {
    let mut entries = vec![
        entry("aaa", EntryKind::File),
        entry("zzz", EntryKind::Directory),
        entry("bbb", EntryKind::Symlink),
        entry("ccc", EntryKind::Fifo),
    ];

    sort_entries(&mut entries);

    assert_eq!(names(&entries), vec!["zzz", "aaa", "bbb", "ccc"]);
    assert!(entries[0].kind.is_directory());
}

#[test]
fn comparison_is_case_insensitive() {
    let mut entries = vec![
        entry("Banana", EntryKind::File),
        entry("cherry", EntryKind::File),
        entry("Apple", EntryKind::File),
    ];

    sort_entries(&mut entries);

    assert_eq!(names(&entries), vec!["Apple", "Banana", "cherry"]);
}

#[test]
fn strips_at_most_one_leading_dot() {
    // "..b" keeps its second dot: the key is ".b", which sorts before
    // plain letters; ".b" itself compares as "b".
    let mut entries = vec![
        entry(".b", EntryKind::File),
        entry("..b", EntryKind::File),
        entry("a", EntryKind::File),
    ];

    sort_entries(&mut entries);

    assert_eq!(names(&entries), vec!["..b", "a", ".b"]);
}

#[test]
fn sorting_preserves_the_entry_set() {
    let original = vec![
        entry("gamma", EntryKind::File),
        entry(".alpha", EntryKind::Directory),
        entry("Beta", EntryKind::Socket),
        entry("delta", EntryKind::Directory),
    ];

    let mut sorted = original.clone();
    sort_entries(&mut sorted);

    assert_eq!(sorted.len(), original.len());
    for entry in &original {
        assert!(
            sorted.contains(entry),
            "entry {:?} must survive sorting unmutated",
            entry.name
        );
    }
}

#[test]
fn resorting_a_sorted_listing_is_a_noop() {
    let mut entries = vec![
        entry("src", EntryKind::Directory),
        entry(".config", EntryKind::Directory),
        entry("Cargo.toml", EntryKind::File),
        entry(".gitignore", EntryKind::File),
        entry("build.rs", EntryKind::File),
    ];

    sort_entries(&mut entries);
    let once = entries.clone();

    sort_entries(&mut entries);
    assert_eq!(entries, once);
}

#[test]
fn dot_and_case_variants_compare_equal() {
    assert_eq!(sort_key(".Git"), sort_key("git"));

    let a = entry(".Git", EntryKind::Directory);
    let b = entry("git", EntryKind::Directory);
    assert_eq!(compare_entries(&a, &b), Ordering::Equal);
}

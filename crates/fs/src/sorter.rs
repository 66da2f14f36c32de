use std::cmp::Ordering;

use crate::entry::Entry;

/// Order a listing for display: directories before everything else,
/// each group alphabetical, case-insensitive, with at most one
/// leading dot ignored.
///
/// Entries whose transformed names tie compare as equal and may land
/// in any relative order; stability is not part of the contract.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_unstable_by(compare_entries);
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.kind.is_directory(), b.kind.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => sort_key(&a.name).cmp(&sort_key(&b.name)),
    }
}

/// Comparison key: at most one leading dot stripped, then lowercased.
fn sort_key(name: &str) -> String {
    name.strip_prefix('.').unwrap_or(name).to_lowercase()
}

#[cfg(test)]
#[path = "sorter_tests.rs"]
mod tests;

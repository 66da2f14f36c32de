use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use crossbeam::channel;
use log::debug;

use crate::config::STAT_WORKERS;
use crate::entry::{Entry, EntryKind};
use crate::error::ListError;

/// Read the immediate children of `path` and snapshot each one's
/// metadata. Non-recursive; the returned order is unspecified and
/// ordering is entirely the sorter's job.
///
/// Fails as a whole on the first problem: either the directory cannot
/// be enumerated, or metadata for any single child cannot be read.
/// No partial result is ever returned and nothing is retried.
pub fn list_dir(path: &Path) -> Result<Vec<Entry>, ListError> {
    let read = fs::read_dir(path).map_err(|e| ListError::DirectoryRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<OsString> = Vec::new();
    for entry_res in read {
        let entry = entry_res.map_err(|e| ListError::DirectoryRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        names.push(entry.file_name());
    }

    debug!("[list_dir] {} children under {:?}", names.len(), path);

    stat_children(path, names)
}

/// Fetch metadata for each child concurrently on a bounded worker
/// pool. Every worker is joined before any result is inspected, so a
/// failed listing never leaves stats in flight.
fn stat_children(dir: &Path, names: Vec<OsString>) -> Result<Vec<Entry>, ListError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let total = names.len();
    let workers = STAT_WORKERS.min(total);

    let (work_tx, work_rx) = channel::unbounded::<OsString>();
    let (done_tx, done_rx) = channel::unbounded::<Result<Entry, ListError>>();

    for name in names {
        let _ = work_tx.send(name);
    }
    drop(work_tx);

    thread::scope(|s| {
        for _ in 0..workers {
            let work_rx = work_rx.clone();
            let done_tx = done_tx.clone();

            s.spawn(move || {
                while let Ok(name) = work_rx.recv() {
                    if done_tx.send(stat_child(dir, &name)).is_err() {
                        return;
                    }
                }
            });
        }
    });
    drop(done_tx);

    let mut entries = Vec::with_capacity(total);
    for outcome in done_rx.iter() {
        entries.push(outcome?);
    }
    Ok(entries)
}

fn stat_child(dir: &Path, name: &OsString) -> Result<Entry, ListError> {
    let full_path = dir.join(name);

    // symlink_metadata: a link is reported as a link, never as its
    // target, so a dangling link is still a valid entry.
    let metadata = fs::symlink_metadata(&full_path).map_err(|e| ListError::Metadata {
        path: full_path.clone(),
        source: e,
    })?;

    Ok(Entry {
        name: name.to_string_lossy().into_owned(),
        path: full_path,
        kind: EntryKind::from_file_type(metadata.file_type()),
        size: metadata.len(),
        mtime_secs: to_unix_secs(metadata.modified().ok()),
    })
}

fn to_unix_secs(t: Option<SystemTime>) -> u64 {
    t.and_then(|tt| tt.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;

use std::path::Path;

use perch_fs::{Entry, EntryKind, ListError, list_dir, sort_entries};
use perch_protocol::{
    BrowseError, BrowseFailure, BrowseRequest, BrowseResponse, DaemonResponse, EntryRecord,
};

/// Serve one browse request: list, sort, convert to wire records. The
/// result crosses the boundary already sorted, and a failed listing
/// becomes a typed `Failed` response carrying the request's
/// correlation id.
pub fn execute_browse(req: BrowseRequest) -> DaemonResponse {
    match browse(Path::new(&req.path)) {
        Ok(entries) => DaemonResponse::Listing(BrowseResponse {
            request_id: req.request_id,
            entries,
        }),
        Err(err) => DaemonResponse::Failed(BrowseFailure {
            request_id: req.request_id,
            error: to_browse_error(&err),
        }),
    }
}

fn browse(path: &Path) -> Result<Vec<EntryRecord>, ListError> {
    let mut entries = list_dir(path)?;
    sort_entries(&mut entries);
    Ok(entries.into_iter().map(to_record).collect())
}

fn to_record(entry: Entry) -> EntryRecord {
    EntryRecord {
        name: entry.name,
        path: entry.path.to_string_lossy().into_owned(),
        kind: to_wire_kind(entry.kind),
        size: entry.size,
        mtime_secs: entry.mtime_secs,
    }
}

fn to_wire_kind(kind: EntryKind) -> perch_protocol::EntryKind {
    use perch_protocol::EntryKind as Wire;

    match kind {
        EntryKind::File => Wire::File,
        EntryKind::Directory => Wire::Directory,
        EntryKind::BlockDevice => Wire::BlockDevice,
        EntryKind::CharDevice => Wire::CharDevice,
        EntryKind::Symlink => Wire::Symlink,
        EntryKind::Fifo => Wire::Fifo,
        EntryKind::Socket => Wire::Socket,
        EntryKind::Unknown => Wire::Unknown,
    }
}

fn to_browse_error(err: &ListError) -> BrowseError {
    match err {
        ListError::DirectoryRead { path, source } => BrowseError::DirectoryRead {
            path: path.to_string_lossy().into_owned(),
            detail: source.to_string(),
        },
        ListError::Metadata { path, source } => BrowseError::Metadata {
            path: path.to_string_lossy().into_owned(),
            detail: source.to_string(),
        },
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;

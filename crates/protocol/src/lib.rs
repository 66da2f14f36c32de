pub mod codec;

use serde::{Deserialize, Serialize};

/// A single directory-listing request. `request_id` is allocated by
/// the client and echoed verbatim in the matching response, so
/// concurrent requests cannot cross-deliver results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseRequest {
    pub request_id: u64,
    /// Absolute path of the directory to list.
    pub path: String,
}

/// Wire form of one listed entry. The daemon converts its core
/// entries into these records; the two crates do not share the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    pub size: u64,
    pub mtime_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    File,
    Directory,
    BlockDevice,
    CharDevice,
    Symlink,
    Fifo,
    Socket,
    Unknown,
}

impl EntryKind {
    /// Short label for display output.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::BlockDevice => "blockdevice",
            EntryKind::CharDevice => "characterdevice",
            EntryKind::Symlink => "symlink",
            EntryKind::Fifo => "fifo",
            EntryKind::Socket => "socket",
            EntryKind::Unknown => "unknown",
        }
    }
}

/// Entries arrive already sorted (directories first, then
/// alphabetical): the sort happens on the side that performs the
/// read, before the result crosses the boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseResponse {
    pub request_id: u64,
    pub entries: Vec<EntryRecord>,
}

/// Typed failure of a listing request, delivered exactly once in
/// place of the entry sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BrowseError {
    /// The directory could not be opened or enumerated.
    DirectoryRead { path: String, detail: String },
    /// Metadata for one child could not be retrieved after
    /// enumeration succeeded.
    Metadata { path: String, detail: String },
}

impl BrowseError {
    pub fn path(&self) -> &str {
        match self {
            BrowseError::DirectoryRead { path, .. } | BrowseError::Metadata { path, .. } => path,
        }
    }
}

impl std::fmt::Display for BrowseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowseError::DirectoryRead { path, detail } => {
                write!(f, "failed to read directory {path}: {detail}")
            }
            BrowseError::Metadata { path, detail } => {
                write!(f, "failed to read metadata for {path}: {detail}")
            }
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrowseFailure {
    pub request_id: u64,
    pub error: BrowseError,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum DaemonRequest {
    Browse(BrowseRequest),
    Ping,
    Status,
}

#[derive(Debug, Serialize, Deserialize)]
pub enum DaemonResponse {
    Listing(BrowseResponse),
    Failed(BrowseFailure),
    Pong,
    Status(String),
}

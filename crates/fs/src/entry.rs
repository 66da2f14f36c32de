use std::fs::FileType;
use std::path::PathBuf;

/// One filesystem object inside a listed directory, snapshotted at
/// read time. Entries are never mutated after creation; a fresh read
/// produces a fresh set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Final path component
    pub name: String,
    /// Full path to the item (parent directory joined with `name`)
    pub path: PathBuf,
    /// Classification derived from a single metadata snapshot
    pub kind: EntryKind,
    /// Byte size as reported by the snapshot, carried verbatim for
    /// every kind
    pub size: u64,
    /// Modification time in seconds since the Unix epoch (0 when
    /// unavailable or pre-epoch)
    pub mtime_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
    /// Classify a metadata snapshot. The first matching predicate
    /// wins, in this fixed order: file, directory, block device,
    /// character device, symlink, FIFO, socket.
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_file() {
            return EntryKind::File;
        }
        if ft.is_dir() {
            return EntryKind::Directory;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;

            if ft.is_block_device() {
                return EntryKind::BlockDevice;
            }
            if ft.is_char_device() {
                return EntryKind::CharDevice;
            }
            if ft.is_symlink() {
                return EntryKind::Symlink;
            }
            if ft.is_fifo() {
                return EntryKind::Fifo;
            }
            if ft.is_socket() {
                return EntryKind::Socket;
            }
        }

        #[cfg(not(unix))]
        {
            if ft.is_symlink() {
                return EntryKind::Symlink;
            }
        }

        EntryKind::Unknown
    }

    pub fn is_directory(self) -> bool {
        self == EntryKind::Directory
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure of a whole listing request. There is no partial success:
/// one unreadable child fails the entire listing.
#[derive(Debug, Error)]
pub enum ListError {
    /// The directory itself could not be opened or enumerated
    /// (missing, not a directory, permission denied).
    #[error("failed to read directory {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Enumeration succeeded but metadata for one child could not be
    /// retrieved (removed mid-scan, permission denied on the item).
    #[error("failed to read metadata for {}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListError {
    /// Path of the offending item.
    pub fn path(&self) -> &Path {
        match self {
            ListError::DirectoryRead { path, .. } | ListError::Metadata { path, .. } => path,
        }
    }
}

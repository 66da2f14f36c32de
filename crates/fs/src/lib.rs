mod config;
mod entry;
mod error;
mod lister;
mod sorter;

pub use entry::{Entry, EntryKind};
pub use error::ListError;
pub use lister::list_dir;
pub use sorter::sort_entries;

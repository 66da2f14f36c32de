use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PROGRAM_NAME;

pub const PREFS_VERSION: u8 = 1;

/// Display-side preferences persisted between sessions.
///
/// The daemon never consults these: hidden-file filtering and the
/// starting directory are presentation concerns, applied by the client
/// after full results come back.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Preferences {
    /// Schema version
    pub version: u8,

    /// Last directory the user browsed; the next session starts here.
    pub last_path: Option<PathBuf>,

    /// Whether dot-prefixed entries are displayed.
    pub show_hidden_files: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            version: PREFS_VERSION,
            last_path: None,
            show_hidden_files: false,
        }
    }
}

pub struct PrefsStore {
    path: PathBuf,
}

pub fn state_dir() -> Option<PathBuf> {
    // Check XDG_STATE_HOME first (Linux)
    if let Ok(xdg_state) = env::var("XDG_STATE_HOME")
        && !xdg_state.is_empty()
    {
        return Some(PathBuf::from(xdg_state).join(PROGRAM_NAME));
    }

    // Fall back to dirs crate
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|p| p.join(PROGRAM_NAME))
}

pub fn prefs_file_path() -> Option<PathBuf> {
    state_dir().map(|d| d.join("prefs.json"))
}

impl PrefsStore {
    pub fn new() -> Option<Self> {
        let path = prefs_file_path()?;
        Some(Self { path })
    }

    /// Create a store with a custom path (for testing).
    #[cfg(test)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved preferences. A missing or malformed file yields
    /// the defaults rather than an error; preferences are best-effort
    /// state, never worth failing a session over.
    pub fn load(&self) -> Preferences {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    debug!("Failed to read preferences file: {e}");
                }
                return Preferences::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(prefs) => prefs,
            Err(e) => {
                debug!("Ignoring malformed preferences file: {e}");
                Preferences::default()
            }
        }
    }

    pub fn save(&self, prefs: &Preferences) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut data = serde_json::to_string_pretty(prefs).map_err(io::Error::other)?;
        data.push('\n');
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
#[path = "prefs_tests.rs"]
mod tests;

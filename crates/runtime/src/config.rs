use std::path::PathBuf;

pub const PROGRAM_NAME: &str = "perch";
pub const PROGRAM_LOG_LEVEL: &str = "PERCH_LOG_LEVEL";
pub const SOCKET_FILE_NAME: &str = "daemon.sock";

pub fn xdg_or_home(xdg_var: &str, home_suffix: &str) -> PathBuf {
    if let Some(dir) = std::env::var_os(xdg_var) {
        PathBuf::from(dir)
    } else {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(home_suffix)
    }
}

pub fn perch_dir() -> PathBuf {
    xdg_or_home("XDG_CACHE_HOME", ".cache").join(PROGRAM_NAME)
}

/// Default Unix domain socket the daemon listens on and the client
/// connects to.
pub fn default_socket_path() -> PathBuf {
    perch_dir().join(SOCKET_FILE_NAME)
}

/// Directory a browse starts in when no last-opened path is saved.
pub fn default_start_path() -> PathBuf {
    // Try to get the user's home directory using environment variables
    #[cfg(unix)]
    {
        std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                // Fallback to current directory if HOME is not set
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            })
    }
    #[cfg(windows)]
    {
        // On Windows, try USERPROFILE first, then HOMEDRIVE+HOMEPATH
        std::env::var_os("USERPROFILE")
            .map(PathBuf::from)
            .or_else(|| {
                let drive = std::env::var_os("HOMEDRIVE")?;
                let path = std::env::var_os("HOMEPATH")?;
                Some(PathBuf::from(drive).join(path))
            })
            .unwrap_or_else(|| {
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            })
    }
    #[cfg(not(any(unix, windows)))]
    {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

mod config;
pub mod logging;
pub mod prefs;

pub use config::{
    PROGRAM_LOG_LEVEL, PROGRAM_NAME, default_socket_path, default_start_path, perch_dir,
    xdg_or_home,
};

pub use logging::init;

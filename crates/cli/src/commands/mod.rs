pub mod browse;
pub mod prefs;
pub mod status;

use clap::{Parser, Subcommand};
pub use browse::BrowseArgs;
pub use prefs::PrefsArgs;
pub use status::StatusArgs;

/// Common error type for command handlers
pub type CommandResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser, Debug)]
#[command(
    name = "perch",
    version,
    about = "Perch - a desktop file browser",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a directory through the perch daemon.
    ///
    /// Example:
    ///   perch browse /home/someone/projects
    ///   perch browse --all --json
    Browse(BrowseArgs),

    /// Show or change the persisted preferences.
    ///
    /// Example:
    ///   perch prefs
    ///   perch prefs --toggle-hidden
    Prefs(PrefsArgs),

    /// Check that the daemon is reachable.
    Ping(StatusArgs),

    /// Show the daemon's configuration.
    Status(StatusArgs),
}

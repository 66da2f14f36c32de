use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use perch_runtime::default_socket_path;

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    // Unix domain socket path
    pub socket_path: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "perch-daemon", about = "Perch filesystem daemon")]
pub struct Cli {
    /// Path to Unix domain socket (optional override)
    #[arg(long)]
    pub socket_path: Option<PathBuf>,
}

impl DaemonConfig {
    pub fn from_args(args: &Cli) -> Result<Self> {
        let socket_path = args.socket_path.clone().unwrap_or_else(default_socket_path);

        Ok(Self { socket_path })
    }

    pub fn from_env() -> Result<Self> {
        let args = Cli::parse();
        Self::from_args(&args)
    }
}

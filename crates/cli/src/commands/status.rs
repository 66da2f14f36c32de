use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use perch_runtime::default_socket_path;

use crate::client::DaemonClient;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Path to the daemon's Unix domain socket (optional override)
    #[arg(long)]
    pub socket_path: Option<PathBuf>,
}

impl StatusArgs {
    fn client(&self) -> DaemonClient {
        DaemonClient::new(self.socket_path.clone().unwrap_or_else(default_socket_path))
    }
}

pub fn ping(args: StatusArgs) -> ExitCode {
    match args.client().ping() {
        Ok(()) => {
            println!("pong");
            ExitCode::from(0)
        }
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

pub fn run(args: StatusArgs) -> ExitCode {
    match args.client().status() {
        Ok(status) => {
            println!("{status}");
            ExitCode::from(0)
        }
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

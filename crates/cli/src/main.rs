use std::process::ExitCode;

use clap::Parser;

mod client;
mod commands;
mod printer;

use commands::{Cli, Command};
use perch_runtime::logging;

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Browse(args) => commands::browse::run(args),
        Command::Prefs(args) => commands::prefs::run(args),
        Command::Ping(args) => commands::status::ping(args),
        Command::Status(args) => commands::status::run(args),
    }
}

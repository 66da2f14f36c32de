use std::process::ExitCode;

use clap::Args;
use log::error;
use perch_runtime::prefs::PrefsStore;

#[derive(Debug, Args)]
pub struct PrefsArgs {
    /// Flip whether dot-prefixed entries are displayed
    #[arg(long)]
    pub toggle_hidden: bool,

    /// Forget the saved last-opened path
    #[arg(long)]
    pub clear_path: bool,
}

pub fn run(args: PrefsArgs) -> ExitCode {
    let store = match PrefsStore::new() {
        Some(s) => s,
        None => {
            eprintln!("[error] no writable state directory for preferences");
            return ExitCode::from(1);
        }
    };

    let mut prefs = store.load();

    if args.toggle_hidden || args.clear_path {
        if args.toggle_hidden {
            prefs.show_hidden_files = !prefs.show_hidden_files;
        }
        if args.clear_path {
            prefs.last_path = None;
        }

        if let Err(e) = store.save(&prefs) {
            error!("[error] Failed to save preferences: {}", e);
            return ExitCode::from(1);
        }
    }

    println!("show-hidden-files: {}", prefs.show_hidden_files);
    println!(
        "last-path: {}",
        prefs
            .last_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_owned())
    );

    ExitCode::from(0)
}

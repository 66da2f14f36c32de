use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use log::debug;
use perch_protocol::EntryRecord;
use perch_runtime::prefs::PrefsStore;
use perch_runtime::{default_socket_path, default_start_path};

use crate::client::DaemonClient;
use crate::commands::CommandResult;
use crate::printer::{ColorChoice, HumanPrinter, JsonPrinter, ListingPrintContext, ListingPrinter, OutputFormat, PrinterConfig};

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output entries as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl OutputOptions {
    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn ListingPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        let cfg = PrinterConfig { format, color };

        match cfg.format {
            OutputFormat::Human => Box::new(HumanPrinter::<std::io::Stdout>::stdout(&cfg)),
            OutputFormat::Json => Box::new(JsonPrinter::<std::io::Stdout>::stdout()),
        }
    }
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Directory to list; defaults to the last browsed path
    pub path: Option<PathBuf>,

    /// Show dot-prefixed entries regardless of the saved preference
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Path to the daemon's Unix domain socket (optional override)
    #[arg(long)]
    pub socket_path: Option<PathBuf>,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

pub fn run(args: BrowseArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[error] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: BrowseArgs) -> CommandResult<ExitCode> {
    let store = PrefsStore::new();
    let prefs = store.as_ref().map(|s| s.load()).unwrap_or_default();

    let path = args
        .path
        .clone()
        .or_else(|| prefs.last_path.clone())
        .unwrap_or_else(default_start_path);

    let socket_path = args.socket_path.clone().unwrap_or_else(default_socket_path);
    let client = DaemonClient::new(socket_path);

    let entries = client.browse(&path)?;
    let total = entries.len();

    // The daemon always returns the full listing; dropping dotfiles
    // is a presentation concern handled here.
    let show_hidden = args.all || prefs.show_hidden_files;
    let visible = visible_entries(&entries, show_hidden);
    let hidden = total - visible.len();

    let path_str = path.to_string_lossy();
    let ctx = ListingPrintContext {
        path: &path_str,
        total,
        hidden,
    };

    let mut printer = args.output.make_printer();
    printer.begin(&ctx)?;
    for entry in &visible {
        printer.print_entry(entry, &ctx)?;
    }
    printer.finish(&ctx)?;

    // Remember where we were for the next session.
    if let Some(store) = &store {
        let mut updated = prefs;
        updated.last_path = Some(path);
        if let Err(e) = store.save(&updated) {
            debug!("Failed to save preferences: {e}");
        }
    }

    Ok(ExitCode::from(0))
}

fn visible_entries(entries: &[EntryRecord], show_hidden: bool) -> Vec<&EntryRecord> {
    entries
        .iter()
        .filter(|e| show_hidden || !e.name.starts_with('.'))
        .collect()
}

#[cfg(test)]
#[path = "browse_tests.rs"]
mod tests;

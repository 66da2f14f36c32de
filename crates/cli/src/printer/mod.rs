use std::io::{self, Write};

use chrono::DateTime;
use perch_protocol::EntryRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Configuration for printing a listing.
#[derive(Debug, Clone, Default)]
pub struct PrinterConfig {
    /// Output format (human or JSON).
    pub format: OutputFormat,
    /// Color handling strategy.
    pub color: ColorChoice,
}

/// Static context about a print run.
#[derive(Debug)]
pub struct ListingPrintContext<'a> {
    /// Directory that was listed.
    pub path: &'a str,
    /// Entries the daemon returned, before the hidden-file filter.
    pub total: usize,
    /// Entries removed by the presentation filter.
    pub hidden: usize,
}

/// Trait for printing directory listings.
///
/// Implementations receive the filtered entry stream plus context and
/// are responsible for formatting and outputting them appropriately.
pub trait ListingPrinter {
    /// Called once before any entries are printed.
    fn begin(&mut self, ctx: &ListingPrintContext) -> io::Result<()>;

    /// Called for each visible entry, in display order.
    fn print_entry(&mut self, entry: &EntryRecord, ctx: &ListingPrintContext) -> io::Result<()>;

    /// Called once after all entries are printed.
    fn finish(&mut self, ctx: &ListingPrintContext) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write> {
    out: W,
    use_color: bool,
}

impl<W: Write> HumanPrinter<W> {
    pub fn new(out: W, use_color: bool) -> Self {
        Self { out, use_color }
    }

    /// Create a printer that writes to stdout with TTY detection.
    pub fn stdout(cfg: &PrinterConfig) -> HumanPrinter<io::Stdout> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            use_color,
        }
    }

    #[inline]
    fn format_name(&self, entry: &EntryRecord) -> String {
        if self.use_color && entry.kind == perch_protocol::EntryKind::Directory {
            format!("\x1b[34m{}\x1b[0m", entry.name)
        } else {
            entry.name.clone()
        }
    }
}

pub struct JsonPrinter<W: Write> {
    out: W,
}

impl<W: Write> JsonPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Create a printer that writes to stdout.
    pub fn stdout() -> JsonPrinter<io::Stdout> {
        JsonPrinter { out: io::stdout() }
    }
}

fn format_mtime(secs: u64) -> String {
    DateTime::from_timestamp(secs as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_owned())
}

impl<W: Write> ListingPrinter for HumanPrinter<W> {
    fn begin(&mut self, ctx: &ListingPrintContext) -> io::Result<()> {
        writeln!(self.out, "{}:", ctx.path)?;
        writeln!(
            self.out,
            "{:<16} {:>10}  {:<16}  NAME",
            "KIND", "SIZE", "MODIFIED"
        )
    }

    fn print_entry(&mut self, entry: &EntryRecord, _ctx: &ListingPrintContext) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<16} {:>10}  {:<16}  {}",
            entry.kind.label(),
            entry.size,
            format_mtime(entry.mtime_secs),
            self.format_name(entry)
        )
    }

    fn finish(&mut self, ctx: &ListingPrintContext) -> io::Result<()> {
        let shown = ctx.total - ctx.hidden;
        if ctx.hidden > 0 {
            writeln!(self.out, "\n{} entries ({} hidden)", shown, ctx.hidden)
        } else {
            writeln!(self.out, "\n{} entries", shown)
        }
    }
}

impl<W: Write> ListingPrinter for JsonPrinter<W> {
    fn begin(&mut self, _ctx: &ListingPrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_entry(&mut self, entry: &EntryRecord, _ctx: &ListingPrintContext) -> io::Result<()> {
        let obj = serde_json::json!({
            "name": entry.name,
            "path": entry.path,
            "kind": entry.kind.label(),
            "size": entry.size,
            "mtime_secs": entry.mtime_secs,
        });
        writeln!(self.out, "{}", obj)
    }

    fn finish(&mut self, _ctx: &ListingPrintContext) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;

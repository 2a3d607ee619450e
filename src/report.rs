//! Human-readable output for scans and deletions.
//!
//! Everything here writes to a caller-supplied [`Write`], normally stdout.
//! Colors are cosmetic and come from [`style`].

use std::io::{self, Write};

use crate::delete::DeletionReport;
use crate::scan::ScanResult;

/// How many entries a scan report lists before summarising the rest.
pub const DEFAULT_DISPLAY_LIMIT: usize = 20;

const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Format size in human-readable format
///
/// Uses 1024-based units, at most two decimals, and drops trailing zeros:
/// `1024` is `"1 KB"`, `1536` is `"1.5 KB"`. Zero is `"0 Bytes"`.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    let rounded = format!("{size:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit_idx])
}

/// Terminal styles for the report.
pub mod style {
    use std::path::Path;

    use colored::{ColoredString, Colorize};

    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn size(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn path(path: &Path) -> ColoredString {
        path.display().to_string().cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn failure(text: &str) -> ColoredString {
        text.red()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Print the ranked list of matches, at most `limit` of them, and the
/// total over all matches.
pub fn render_scan(result: &ScanResult, limit: usize, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        style::heading(&format!(
            "Found {} node_modules {}:",
            result.len(),
            plural(result.len())
        ))
    )?;
    writeln!(out)?;

    for (rank, entry) in result.entries().iter().take(limit).enumerate() {
        writeln!(
            out,
            "{:>4}. {}  {}",
            rank + 1,
            style::size(&format!("{:>10}", format_size(entry.size_bytes()))),
            style::path(entry.path())
        )?;
    }

    let hidden = result.len().saturating_sub(limit);
    if hidden > 0 {
        writeln!(
            out,
            "{}",
            style::muted(&format!("      ... and {hidden} more {}", plural(hidden)))
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        style::heading("Total size:"),
        style::size(&format_size(result.total_bytes()))
    )
}

/// Print the outcome of a deletion batch.
///
/// `approx_freed` is the scan total for the batch, not a re-measurement: the
/// directories are gone by now, and failed ones make it an overestimate.
pub fn render_deletion(
    report: &DeletionReport,
    approx_freed: u64,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        style::success(&format!(
            "Deleted {} of {} node_modules {}.",
            report.succeeded(),
            report.len(),
            plural(report.len())
        ))
    )?;
    writeln!(
        out,
        "Freed approximately {}.",
        style::size(&format_size(approx_freed))
    )?;

    let failed: Vec<_> = report.failed().collect();
    if !failed.is_empty() {
        writeln!(
            out,
            "{}",
            style::failure(&format!(
                "Failed to delete {} {}:",
                failed.len(),
                plural(failed.len())
            ))
        )?;
        for outcome in failed {
            writeln!(
                out,
                "  {}: {}",
                style::path(outcome.path()),
                outcome.error().unwrap_or("unknown error")
            )?;
        }
    }

    Ok(())
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "directory" } else { "directories" }
}

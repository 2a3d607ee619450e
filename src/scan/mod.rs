//! Discovery and sizing of `node_modules` directories.
//!
//! A scan runs in two sequential steps:
//!
//! 1. [`find_node_modules`] walks the root up to a depth bound and collects
//!    every match, without descending into matches
//! 2. a [`SizeProbe`] measures each match, one directory at a time
//!
//! The result is a [`ScanResult`], ranked largest first.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use modprune::scan::{self, SizeMode, SizeProbe};
//!
//! let probe = SizeProbe::for_mode(SizeMode::Manual);
//! let result = scan::scan(Path::new("."), scan::DEFAULT_MAX_DEPTH, &probe);
//! println!("{} directories, {} bytes", result.len(), result.total_bytes());
//! ```

mod finder;
mod size;

use std::path::{Path, PathBuf};

pub use finder::{EXCLUDED_DIR_NAMES, TARGET_DIR_NAME, find_node_modules};
pub use size::{ManualWalk, NativeSummary, SizeMode, SizeProbe, SizeStrategy};

use crate::logging::Logger;
use crate::report::format_size;

/// How many levels below the root are listed when no depth is given.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// A discovered `node_modules` directory and its measured size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    path: PathBuf,
    size_bytes: u64,
}

impl DirectoryEntry {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Self {
        Self {
            path: path.into(),
            size_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}

/// All matches of one scan, largest first, with their combined size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanResult {
    entries: Vec<DirectoryEntry>,
    total_bytes: u64,
}

impl ScanResult {
    /// Rank `entries` by descending size and total them. Equal sizes keep
    /// their discovery order.
    pub fn new(mut entries: Vec<DirectoryEntry>) -> Self {
        entries.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes));
        let total_bytes = entries.iter().map(|entry| entry.size_bytes).sum();

        Self {
            entries,
            total_bytes,
        }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Sum over every entry, including ones a report does not display.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries
            .iter()
            .map(|entry| entry.path.clone())
            .collect()
    }
}

impl FromIterator<DirectoryEntry> for ScanResult {
    fn from_iter<I: IntoIterator<Item = DirectoryEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Find every `node_modules` under `root` and measure each one.
pub fn scan(root: &Path, max_depth: usize, probe: &SizeProbe) -> ScanResult {
    scan_with_log(root, max_depth, probe, &Logger::silent())
}

pub(crate) fn scan_with_log(
    root: &Path,
    max_depth: usize,
    probe: &SizeProbe,
    log: &Logger,
) -> ScanResult {
    let paths = finder::find_with_log(root, max_depth, log);
    let count = paths.len();

    if count > 0 {
        log.info(format!(
            "Found {count} node_modules directories, calculating sizes..."
        ));
    }

    paths
        .into_iter()
        .enumerate()
        .map(|(idx, path)| {
            let size = probe.size_of(&path);
            log.verbose(
                1,
                format!(
                    "  [{}/{count}] {} {}",
                    idx + 1,
                    format_size(size),
                    path.display()
                ),
            );
            DirectoryEntry::new(path, size)
        })
        .collect()
}

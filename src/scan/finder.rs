use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::logging::Logger;

/// Name of the dependency directories modprune looks for.
pub const TARGET_DIR_NAME: &str = "node_modules";

/// Directory names that are never entered, on top of anything starting with
/// a dot. These are OS library and system folders that cannot hold projects
/// worth cleaning and are often slow or forbidden to list.
pub const EXCLUDED_DIR_NAMES: &[&str] = &[
    "Library",
    "System",
    "Applications",
    "Windows",
    "Program Files",
    "Program Files (x86)",
    "ProgramData",
    "AppData",
    "$RECYCLE.BIN",
    "System Volume Information",
];

/// Collect every `node_modules` directory below `root`.
///
/// `root` is depth 0. A directory at depth `d` is listed only while
/// `d <= max_depth`, so a match is found when its parent sits at most
/// `max_depth` levels below `root`. Matches are never descended into, and
/// hidden or excluded directories are skipped with everything under them.
///
/// Directories that cannot be read are skipped; the walk itself never fails.
/// Symbolic links are not followed. The result is sorted by path.
pub fn find_node_modules(root: &Path, max_depth: usize) -> Vec<PathBuf> {
    find_with_log(root, max_depth, &Logger::silent())
}

pub(crate) fn find_with_log(root: &Path, max_depth: usize, log: &Logger) -> Vec<PathBuf> {
    let discovery = discover(root, max_depth, log);
    if discovery.unreadable > 0 {
        log.verbose(
            1,
            format!("Skipped {} unreadable entries", discovery.unreadable),
        );
    }
    discovery.found
}

/// Matches plus the number of entries the walk could not read.
#[derive(Debug, Default)]
pub(super) struct Discovery {
    pub(super) found: Vec<PathBuf>,
    pub(super) unreadable: usize,
}

pub(super) fn discover(root: &Path, max_depth: usize, log: &Logger) -> Discovery {
    let mut found = Vec::new();
    let mut unreadable = 0;

    // Matches are taken in the filter so walkdir never opens them.
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth.saturating_add(1))
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if is_match(entry) {
                log.verbose(2, format!("  Found {}", entry.path().display()));
                found.push(entry.path().to_path_buf());
                return false;
            }
            !is_excluded(entry)
        });

    for next in walker {
        if let Err(err) = next {
            log.verbose(2, format!("  Skipping unreadable directory: {err}"));
            unreadable += 1;
        }
    }

    found.sort();
    Discovery { found, unreadable }
}

fn is_match(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == TARGET_DIR_NAME
}

/// Hidden and system directories are pruned before walkdir reads them.
fn is_excluded(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || EXCLUDED_DIR_NAMES.iter().any(|excluded| *excluded == name)
}

//! Recursive removal of confirmed directories.

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::logging::Logger;
use crate::report::style;

/// Result of deleting one directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeletionOutcome {
    path: PathBuf,
    error: Option<String>,
}

impl DeletionOutcome {
    pub fn success(path: PathBuf) -> Self {
        Self { path, error: None }
    }

    pub fn failure(path: PathBuf, error: impl Into<String>) -> Self {
        Self {
            path,
            error: Some(error.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Outcomes of a deletion batch, in the order they were processed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeletionReport {
    outcomes: Vec<DeletionOutcome>,
}

impl DeletionReport {
    pub fn new(outcomes: Vec<DeletionOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[DeletionOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &DeletionOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

/// Remove `path` and everything below it.
///
/// A path that is already gone counts as removed.
pub fn delete_dir(path: &Path) -> io::Result<()> {
    if let Err(err) = fs::symlink_metadata(path) {
        return if err.kind() == ErrorKind::NotFound {
            Ok(())
        } else {
            Err(err)
        };
    }

    match fs::remove_dir_all(path) {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Delete each path in turn, writing one progress line per path to `out`.
///
/// A failure is recorded, logged at verbose level 1 and the batch moves on to
/// the next path.
pub fn delete_all(paths: &[PathBuf], log: &Logger, out: &mut impl Write) -> DeletionReport {
    let total = paths.len();
    let mut outcomes = Vec::with_capacity(total);

    for (idx, path) in paths.iter().enumerate() {
        write!(out, "  [{}/{total}] Deleting {} ... ", idx + 1, style::path(path)).ok();
        out.flush().ok();

        match delete_dir(path) {
            Ok(()) => {
                writeln!(out, "{}", style::success("done")).ok();
                outcomes.push(DeletionOutcome::success(path.clone()));
            }
            Err(err) => {
                writeln!(out, "{}", style::failure("failed")).ok();
                log.verbose(1, format!("Could not delete {}: {err}", path.display()));
                outcomes.push(DeletionOutcome::failure(path.clone(), err.to_string()));
            }
        }
    }

    DeletionReport::new(outcomes)
}

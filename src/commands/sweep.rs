//! Scan, report, confirm and delete: one full modprune run.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::confirm::confirm;
use crate::delete::{self, DeletionReport};
use crate::error::{PruneError, Result};
use crate::logging::Logger;
use crate::report::{self, DEFAULT_DISPLAY_LIMIT, format_size, style};
use crate::scan::{self, DEFAULT_MAX_DEPTH, ScanResult, SizeMode, SizeProbe};

/// Stages of a run. Each one executes at most once, in this order; a run
/// ends in either [`Phase::Cancelled`] or [`Phase::Done`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scanning,
    Reporting,
    AwaitingConfirmation,
    Cancelled,
    Deleting,
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "idle",
            Phase::Scanning => "scanning",
            Phase::Reporting => "reporting",
            Phase::AwaitingConfirmation => "awaiting confirmation",
            Phase::Cancelled => "cancelled",
            Phase::Deleting => "deleting",
            Phase::Done => "done",
        };
        f.write_str(name)
    }
}

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum SweepOutcome {
    /// No `node_modules` under the root; nothing was asked.
    NothingFound,
    /// Report-only run; nothing was asked or deleted.
    Reported { scan: ScanResult },
    /// The user declined; nothing was deleted.
    Cancelled { scan: ScanResult },
    /// The user confirmed and the batch was processed.
    Completed {
        scan: ScanResult,
        deletion: DeletionReport,
    },
}

impl SweepOutcome {
    pub fn final_phase(&self) -> Phase {
        match self {
            SweepOutcome::Cancelled { .. } => Phase::Cancelled,
            _ => Phase::Done,
        }
    }

    /// The scan behind this outcome, if anything was found.
    pub fn scan(&self) -> Option<&ScanResult> {
        match self {
            SweepOutcome::NothingFound => None,
            SweepOutcome::Reported { scan }
            | SweepOutcome::Cancelled { scan }
            | SweepOutcome::Completed { scan, .. } => Some(scan),
        }
    }

    pub fn deletion(&self) -> Option<&DeletionReport> {
        match self {
            SweepOutcome::Completed { deletion, .. } => Some(deletion),
            _ => None,
        }
    }
}

pub struct Sweep {
    root: PathBuf,
    max_depth: usize,
    display_limit: usize,
    size_mode: SizeMode,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

#[derive(Debug)]
pub struct SweepBuilder {
    root: Option<PathBuf>,
    max_depth: usize,
    display_limit: usize,
    size_mode: SizeMode,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

impl Default for SweepBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepBuilder {
    pub fn new() -> Self {
        Self {
            root: None,
            max_depth: DEFAULT_MAX_DEPTH,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            size_mode: SizeMode::default(),
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }

    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    pub fn size_mode(mut self, mode: SizeMode) -> Self {
        self.size_mode = mode;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<Sweep> {
        let root = self.root.ok_or_else(|| PruneError::ConfigError {
            message: "A root directory is required".to_string(),
        })?;

        if self.display_limit == 0 {
            return Err(PruneError::ConfigError {
                message: "The display limit must be at least 1".to_string(),
            });
        }

        Ok(Sweep {
            root,
            max_depth: self.max_depth,
            display_limit: self.display_limit,
            size_mode: self.size_mode,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

impl Sweep {
    pub fn builder() -> SweepBuilder {
        SweepBuilder::new()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run against the process's stdin and stdout.
    pub fn run(&self) -> Result<SweepOutcome> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with_io(&mut stdin.lock(), &mut stdout.lock())
    }

    /// Run with explicit input (for the confirmation answer) and output (for
    /// the report).
    ///
    /// Only an invalid root or a failure to write the report is an error.
    /// Nothing is deleted unless the answer read from `input` is affirmative.
    pub fn run_with_io(
        &self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<SweepOutcome> {
        let log = Logger::new(self.verbose, self.quiet);
        let enter = |phase: Phase| log.verbose(2, format!("[{phase}]"));

        enter(Phase::Idle);
        self.validate_root()?;

        enter(Phase::Scanning);
        writeln!(
            output,
            "Scanning {} for node_modules (max depth {})...",
            style::path(&self.root),
            self.max_depth
        )
        .map_err(stdout_error)?;

        let probe = SizeProbe::for_mode(self.size_mode).with_logger(log);
        log.verbose(
            1,
            format!("Size strategies: {}", probe.strategy_names().join(", ")),
        );
        let result = scan::scan_with_log(&self.root, self.max_depth, &probe, &log);

        enter(Phase::Reporting);
        if result.is_empty() {
            writeln!(output, "No node_modules directories found.").map_err(stdout_error)?;
            enter(Phase::Done);
            return Ok(SweepOutcome::NothingFound);
        }

        writeln!(output).map_err(stdout_error)?;
        report::render_scan(&result, self.display_limit, output).map_err(stdout_error)?;
        writeln!(output).map_err(stdout_error)?;

        if self.dry_run {
            writeln!(output, "Dry run: nothing was deleted.").map_err(stdout_error)?;
            enter(Phase::Done);
            return Ok(SweepOutcome::Reported { scan: result });
        }

        enter(Phase::AwaitingConfirmation);
        let prompt = format!(
            "Delete {} node_modules {} ({})?",
            result.len(),
            if result.len() == 1 { "directory" } else { "directories" },
            format_size(result.total_bytes())
        );
        if !confirm(&prompt, input, output) {
            enter(Phase::Cancelled);
            writeln!(output, "Cancelled. Nothing was deleted.").map_err(stdout_error)?;
            return Ok(SweepOutcome::Cancelled { scan: result });
        }

        enter(Phase::Deleting);
        writeln!(output).map_err(stdout_error)?;
        let deletion = delete::delete_all(&result.paths(), &log, output);
        report::render_deletion(&deletion, result.total_bytes(), output).map_err(stdout_error)?;

        enter(Phase::Done);
        Ok(SweepOutcome::Completed {
            scan: result,
            deletion,
        })
    }

    fn validate_root(&self) -> Result<()> {
        match fs::metadata(&self.root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(PruneError::RootNotDirectory(self.root.clone())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(PruneError::InvalidRoot(self.root.clone()))
            }
            Err(source) => Err(PruneError::IoError {
                path: self.root.clone(),
                source,
            }),
        }
    }
}

fn stdout_error(source: io::Error) -> PruneError {
    PruneError::IoError {
        path: PathBuf::from("<stdout>"),
        source,
    }
}

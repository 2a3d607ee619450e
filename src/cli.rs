//! Command-line interface definitions for modprune.
//!
//! modprune takes a single optional positional path plus a handful of
//! options, each of which can also come from a `MODPRUNE_*` environment
//! variable.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use modprune::cli::Cli;
//!
//! let cli = Cli::parse();
//! println!("Scanning {:?} to depth {}", cli.path(), cli.max_depth());
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::report::DEFAULT_DISPLAY_LIMIT;
use crate::scan::{DEFAULT_MAX_DEPTH, SizeMode};

/// Command-line interface for modprune.
#[derive(Debug, Parser)]
#[command(
    name = "modprune",
    bin_name = "modprune",
    author,
    version,
    about = "Find node_modules directories, show how much space they use, and delete them",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// How many directory levels below PATH to search
    #[arg(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH, env = "MODPRUNE_MAX_DEPTH")]
    max_depth: usize,

    /// How many of the largest directories to list
    #[arg(
        short = 'l',
        long = "limit",
        default_value_t = DEFAULT_DISPLAY_LIMIT,
        env = "MODPRUNE_DISPLAY_LIMIT"
    )]
    display_limit: usize,

    /// How directory sizes are measured
    #[arg(long, value_enum, default_value_t = SizeMode::Auto, env = "MODPRUNE_SIZE_MODE")]
    size_mode: SizeMode,

    /// Only report what was found; never prompt or delete
    #[arg(long, env = "MODPRUNE_DRY_RUN")]
    dry_run: bool,

    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, env = "MODPRUNE_VERBOSE")]
    verbose: u8,

    /// Silence diagnostics on stderr
    #[arg(short, long, conflicts_with = "verbose", env = "MODPRUNE_QUIET")]
    quiet: bool,
}

impl Cli {
    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// The requested root, if one was given
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Resolve the root against `working_dir`.
    ///
    /// Relative paths are joined onto `working_dir`; no path is required to
    /// exist here.
    pub fn root_in(&self, working_dir: &Path) -> PathBuf {
        match self.path() {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => working_dir.join(path),
            None => working_dir.to_path_buf(),
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn display_limit(&self) -> usize {
        self.display_limit
    }

    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Builder for [`Cli`]
#[derive(Debug)]
pub struct CliBuilder {
    path: Option<PathBuf>,
    max_depth: usize,
    display_limit: usize,
    size_mode: SizeMode,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

impl Default for CliBuilder {
    fn default() -> Self {
        Self {
            path: None,
            max_depth: DEFAULT_MAX_DEPTH,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            size_mode: SizeMode::default(),
            dry_run: false,
            verbose: 0,
            quiet: false,
        }
    }
}

impl CliBuilder {
    /// Set the directory to scan
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
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

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Cli {
        Cli {
            path: self.path,
            max_depth: self.max_depth,
            display_limit: self.display_limit,
            size_mode: self.size_mode,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

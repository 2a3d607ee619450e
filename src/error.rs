//! Error types for modprune.
//!
//! This module defines the error type used throughout modprune, using
//! `thiserror` for the definitions and `miette` for diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - Only startup problems (a bad root, an unreadable working directory) are
//!   fatal and travel up to `main`
//! - Traversal, sizing and deletion failures are absorbed where they happen:
//!   a subtree is skipped, a size counts as zero, a deletion is recorded as
//!   failed
//! - A declined confirmation is a normal outcome, not an error
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use modprune::error::{PruneError, Result};
//!
//! fn check_root(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(PruneError::InvalidRoot(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in modprune operations
#[derive(Error, Debug, Diagnostic)]
pub enum PruneError {
    /// The root passed on the command line does not exist.
    ///
    /// Raised before any traversal starts; the process exits with status 1.
    #[error("Path '{0}' does not exist")]
    #[diagnostic(
        code(modprune::root::not_found),
        help("Pass an existing directory, or omit the path to scan the current directory.")
    )]
    InvalidRoot(
        /// The root that was requested
        PathBuf,
    ),

    /// The root exists but is a file or something else that cannot be
    /// listed.
    #[error("Path '{0}' is not a directory")]
    #[diagnostic(
        code(modprune::root::not_directory),
        help("modprune scans directories; pass the project folder instead of a file.")
    )]
    RootNotDirectory(
        /// The root that was requested
        PathBuf,
    ),

    /// File system I/O error outside of the recoverable phases.
    ///
    /// Used for the working directory lookup at startup and for failures
    /// writing the report to stdout.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(modprune::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A size strategy could not measure a directory.
    ///
    /// Never reaches the user as a failure: `SizeProbe` falls back to the
    /// next strategy and finally to zero.
    #[error("Size strategy '{strategy}' failed for '{path}': {message}")]
    #[diagnostic(code(modprune::size::probe_failed))]
    SizeProbe {
        /// Directory being measured
        path: PathBuf,
        /// Name of the strategy that failed
        strategy: &'static str,
        /// What went wrong
        message: String,
    },

    /// Invalid programmatic configuration.
    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(modprune::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PruneError>;

//! Implementation of the modprune command.
//!
//! `mod.rs` turns parsed CLI arguments into a [`Sweep`]; the run itself
//! lives in `sweep`.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{PruneError, Result};

pub(crate) mod sweep;

pub use sweep::{Phase, Sweep, SweepBuilder, SweepOutcome};

#[cfg(test)]
mod tests;

/// Execute the command described by the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<SweepOutcome> {
    execute_with_dir(cli, None)
}

/// Execute with an explicit working directory for resolving a relative root.
pub fn execute_with_dir(cli: &Cli, working_dir: Option<&Path>) -> Result<SweepOutcome> {
    let current_dir = if let Some(dir) = working_dir {
        dir.to_path_buf()
    } else {
        std::env::current_dir().map_err(|source| PruneError::IoError {
            path: PathBuf::from("."),
            source,
        })?
    };

    Sweep::builder()
        .root(cli.root_in(&current_dir))
        .max_depth(cli.max_depth())
        .display_limit(cli.display_limit())
        .size_mode(cli.size_mode())
        .dry_run(cli.dry_run())
        .verbose(cli.verbose())
        .quiet(cli.quiet())
        .build()?
        .run()
}

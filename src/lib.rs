//! # modprune
//!
//! Finds `node_modules` directories below a root, shows how much disk space
//! each one takes, and deletes them once the user says yes.
//!
//! ## Overview
//!
//! A run goes through the same steps every time:
//!
//! 1. **Scan**: walk the root up to a depth bound (5 by default), collecting
//!    every `node_modules` without descending into it and skipping hidden
//!    and system directories
//! 2. **Measure**: size each match with `du` when available, falling back to
//!    a manual walk
//! 3. **Report**: list the largest matches and the combined total
//! 4. **Confirm**: ask once; anything but `y`/`yes` cancels
//! 5. **Delete**: remove each match, carrying on past failures, and report
//!    what happened
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: The sweep state machine tying everything together
//! - [`scan`]: Directory discovery and size strategies
//! - [`report`]: Size formatting and terminal output
//! - [`confirm`]: The yes/no gate
//! - [`delete`]: Recursive removal with per-directory outcomes
//! - [`error`]: Error types with thiserror + miette
//!
//! ## Library Usage
//!
//! ```no_run
//! use modprune::cli::Cli;
//! use modprune::commands;
//!
//! let cli = Cli::builder().path("projects").dry_run(true).build();
//! let outcome = commands::execute(&cli)?;
//! if let Some(scan) = outcome.scan() {
//!     println!("{} bytes in node_modules", scan.total_bytes());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Only a missing or unusable root is fatal. Unreadable directories, failed
//! size measurements and failed deletions are recovered where they happen
//! and show up in the report instead.

pub mod cli;
pub mod commands;
pub mod confirm;
pub mod delete;
pub mod error;
pub mod report;
pub mod scan;

mod logging;

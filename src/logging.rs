use std::fmt::Display;

/// Stderr diagnostics gated by `--verbose` and `--quiet`.
///
/// The report itself goes to stdout through the reporter; only progress and
/// recovered errors go through here.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    verbose: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// A logger that never prints, for library callers and tests.
    pub fn silent() -> Self {
        Self {
            verbose: 0,
            quiet: true,
        }
    }

    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    pub fn verbose(&self, level: u8, message: impl Display) {
        if self.enabled(level) {
            eprintln!("{message}");
        }
    }

    pub fn enabled(&self, level: u8) -> bool {
        !self.quiet && self.verbose >= level
    }
}

use std::path::Path;
use std::process::{Command, Stdio};

use clap::ValueEnum;
use walkdir::WalkDir;

use crate::error::{PruneError, Result};
use crate::logging::Logger;

/// A way of measuring the total size of a directory tree.
pub trait SizeStrategy {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Total size of `path` and everything below it, in bytes.
    fn measure(&self, path: &Path) -> Result<u64>;
}

/// Asks the platform's `du` for a summary (`du -sk`).
///
/// Much faster than walking huge dependency trees from Rust, but reports
/// allocated blocks rather than apparent file lengths. Fails when `du` is
/// missing (Windows), exits non-zero or prints something unexpected.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeSummary;

impl SizeStrategy for NativeSummary {
    fn name(&self) -> &'static str {
        "du"
    }

    fn measure(&self, path: &Path) -> Result<u64> {
        let output = Command::new("du")
            .arg("-sk")
            .arg(path)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|err| self.failure(path, format!("could not run du: {err}")))?;

        if !output.status.success() {
            return Err(self.failure(path, format!("du exited with {}", output.status)));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_du_kib(&stdout)
            .map(|kib| kib.saturating_mul(1024))
            .ok_or_else(|| self.failure(path, format!("unrecognised du output {stdout:?}")))
    }
}

impl NativeSummary {
    fn failure(&self, path: &Path, message: String) -> PruneError {
        PruneError::SizeProbe {
            path: path.to_path_buf(),
            strategy: self.name(),
            message,
        }
    }
}

/// First field of `du -sk` output: the size in KiB.
fn parse_du_kib(output: &str) -> Option<u64> {
    output.split_whitespace().next()?.parse().ok()
}

/// Sums the length of every regular file below the directory.
///
/// Entries that cannot be read count as zero, so this never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualWalk;

impl SizeStrategy for ManualWalk {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn measure(&self, path: &Path) -> Result<u64> {
        let total = WalkDir::new(path)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.metadata().ok())
            .map(|metadata| metadata.len())
            .sum();

        Ok(total)
    }
}

/// Which strategies a [`SizeProbe`] tries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SizeMode {
    /// `du` summary, falling back to a manual walk
    #[default]
    Auto,
    /// `du` summary; the manual walk is only a last resort
    Native,
    /// Manual walk only; exact apparent sizes
    Manual,
}

/// Measures directories with the first strategy that succeeds.
///
/// [`SizeProbe::size_of`] cannot fail: when every strategy errors the
/// directory counts as zero bytes.
pub struct SizeProbe {
    strategies: Vec<Box<dyn SizeStrategy>>,
    log: Logger,
}

impl SizeProbe {
    /// Build a probe from an explicit list of strategies, tried in order.
    pub fn new(strategies: Vec<Box<dyn SizeStrategy>>) -> Self {
        Self {
            strategies,
            log: Logger::silent(),
        }
    }

    pub fn for_mode(mode: SizeMode) -> Self {
        match mode {
            SizeMode::Auto | SizeMode::Native => {
                Self::new(vec![Box::new(NativeSummary), Box::new(ManualWalk)])
            }
            SizeMode::Manual => Self::new(vec![Box::new(ManualWalk)]),
        }
    }

    /// Report strategy failures through `log`.
    pub fn with_logger(mut self, log: Logger) -> Self {
        self.log = log;
        self
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn size_of(&self, path: &Path) -> u64 {
        for strategy in &self.strategies {
            match strategy.measure(path) {
                Ok(bytes) => return bytes,
                Err(err) => self.log.verbose(1, format!("  {err}")),
            }
        }

        self.log.verbose(
            1,
            format!("  Could not measure {}, counting it as 0", path.display()),
        );
        0
    }
}

impl Default for SizeProbe {
    fn default() -> Self {
        Self::for_mode(SizeMode::default())
    }
}

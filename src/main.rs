//! # modprune CLI
//!
//! Reclaims disk space from `node_modules` directories.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory
//! modprune
//!
//! # Scan a projects folder, looking three levels deep
//! modprune ~/code --max-depth 3
//!
//! # Only show what would be removed
//! modprune ~/code --dry-run
//! ```
//!
//! ## Environment Variables
//!
//! - `MODPRUNE_MAX_DEPTH`: Directory levels to search (default: 5)
//! - `MODPRUNE_DISPLAY_LIMIT`: Entries to list (default: 20)
//! - `MODPRUNE_SIZE_MODE`: `auto` (du, then a manual walk; default), `native` or `manual`
//! - `MODPRUNE_DRY_RUN`: Report only
//! - `MODPRUNE_VERBOSE` / `MODPRUNE_QUIET`: Diagnostic verbosity
//!
//! ## Exit Status
//!
//! `0` when the run completes, including when nothing is found or the user
//! declines; `1` when the path does not exist or another startup error
//! occurs.

use std::io::IsTerminal;

use clap::Parser;
use modprune::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Plain output when piped or captured
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse();

    modprune::commands::execute(&cli)?;

    Ok(())
}

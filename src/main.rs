//! Clustermap CLI entry point.
//!
//! Parses the command line, installs the tracing subscriber implied by the
//! verbosity flags, executes the command, and renders any failure as a
//! user-friendly error before exiting non-zero.

use anyhow::Result;
use clap::Parser;
use clustermap::cli::Cli;
use clustermap::core::user_friendly_error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    if let Some(filter) = cli.log_filter() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init();
    }

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}

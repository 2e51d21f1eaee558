//! Command-line interface for clustermap.
//!
//! The CLI covers the server-side half of the pipeline: turning a file of
//! news items into the cluster payload a page embeds.
//!
//! # Available Commands
//!
//! - `cluster` - Cluster geocoded news items into bunches at each map scale
//! - `page` - Render the page payload (bunches plus the id-to-metadata table)
//!
//! # Usage
//!
//! ```bash
//! # Bunches per scale, to stdout
//! clustermap cluster --input items.json
//!
//! # A tighter radius at two specific scales, written to a file
//! clustermap cluster --input items.json --radius 12 \
//!     --scale 614400 --scale 19200 --output bunches.json
//!
//! # The embedded page payload, with pre-clustered bunches
//! clustermap page --input items.json --bunches bunches-19200.json
//! ```
//!
//! Input files hold a JSON array of news items; each element carries `id`,
//! `schema.id`, and optionally `location` as a `[lng, lat]` pair. Items
//! without a location are listed in the page payload but never clustered.

mod cluster;
mod page;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Main CLI structure for clustermap.
///
/// Global verbosity flags control the `tracing` filter the binary installs
/// before dispatching; `--verbose` and `--quiet` are mutually exclusive.
#[derive(Parser)]
#[command(
    name = "clustermap",
    about = "Cluster geocoded news items and build map-page payloads",
    version
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (equivalent to RUST_LOG=debug).
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Cluster geocoded news items into bunches at each map scale.
    ///
    /// See [`cluster::ClusterCommand`] for options.
    Cluster(cluster::ClusterCommand),

    /// Render the JSON payload a cluster-map page embeds.
    ///
    /// See [`page::PageCommand`] for options.
    Page(page::PageCommand),
}

impl Cli {
    /// The tracing filter directive implied by the verbosity flags.
    ///
    /// `None` means logging should stay off entirely (`--quiet`).
    #[must_use]
    pub fn log_filter(&self) -> Option<String> {
        if self.quiet {
            None
        } else if self.verbose {
            Some("debug".to_string())
        } else {
            std::env::var("RUST_LOG")
                .ok()
                .or_else(|| Some("info".to_string()))
        }
    }

    /// Execute the selected subcommand.
    ///
    /// # Errors
    ///
    /// Propagates the subcommand's failure for the binary to display.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Cluster(cmd) => cmd.execute(),
            Commands::Page(cmd) => cmd.execute(),
        }
    }
}

/// Read and parse a JSON input file, labelling failures with the path.
pub(crate) fn read_json_file<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T> {
    use crate::core::ClustermapError;

    let raw = std::fs::read_to_string(path).map_err(|e| ClustermapError::InputFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let parsed = serde_json::from_str(&raw).map_err(|e| ClustermapError::InputFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(parsed)
}

/// Write JSON to a file, or pretty-print it to stdout when no path is given.
pub(crate) fn emit_json(value: &serde_json::Value, output: Option<&std::path::Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            tracing::debug!(path = %path.display(), "wrote output");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

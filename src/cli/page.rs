//! The `page` command.

use super::{emit_json, read_json_file};
use crate::clustering::Bunch;
use crate::newsitem::NewsItem;
use crate::page::page_payload;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Render the JSON payload a cluster-map page embeds.
///
/// Combines the news-item list with pre-clustered bunches (from the
/// `cluster` command, or empty when none are supplied) into the
/// `{"all_bunches": ..., "newsitems": ...}` object the page initializer
/// consumes.
#[derive(Debug, Args)]
pub struct PageCommand {
    /// JSON file holding the news-item array
    #[arg(short, long)]
    input: PathBuf,

    /// JSON file holding a bunch array (`[[objects, center], ...]`)
    #[arg(short, long)]
    bunches: Option<PathBuf>,

    /// Write the payload here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PageCommand {
    /// Execute the page command.
    ///
    /// # Errors
    ///
    /// Fails if either input file is unreadable or malformed. Nothing is
    /// written on failure.
    pub fn execute(self) -> Result<()> {
        let items: Vec<NewsItem> = read_json_file(&self.input)?;
        let bunches: Vec<Bunch> = match &self.bunches {
            Some(path) => read_json_file(path)?,
            None => Vec::new(),
        };
        info!(
            items = items.len(),
            bunches = bunches.len(),
            "rendering page payload"
        );

        let payload = page_payload(&items, &bunches)?;
        emit_json(&payload, self.output.as_deref())
    }
}

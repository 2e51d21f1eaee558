//! The `cluster` command.

use super::{emit_json, read_json_file};
use crate::clustering::cluster_scales;
use crate::geo::{DEFAULT_SCALES, Extent};
use crate::newsitem::{NewsItem, geocoded};
use anyhow::Result;
use clap::Args;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::info;

/// Cluster geocoded news items into bunches at each map scale.
///
/// Reads a JSON array of news items, clusters the geocoded ones at every
/// requested scale, and emits a JSON object keyed by scale:
///
/// ```json
/// {"19200": [[[12345, 23456], [-87.635, 41.875]], ...], ...}
/// ```
#[derive(Debug, Args)]
pub struct ClusterCommand {
    /// JSON file holding the news-item array
    #[arg(short, long)]
    input: PathBuf,

    /// Buffer radius in screen pixels
    #[arg(short, long, default_value_t = 20.0)]
    radius: f64,

    /// Map scale (1/n denominator); repeat for several, defaults to the
    /// standard zoom-level set
    #[arg(short, long = "scale")]
    scales: Vec<u32>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ClusterCommand {
    /// Execute the cluster command.
    ///
    /// # Errors
    ///
    /// Fails if the input file is unreadable or malformed, or if a scale or
    /// the radius is invalid. Nothing is written on failure.
    pub fn execute(self) -> Result<()> {
        let items: Vec<NewsItem> = read_json_file(&self.input)?;
        let objs = geocoded(&items);
        info!(
            items = items.len(),
            geocoded = objs.len(),
            "clustering news items"
        );

        let scales = if self.scales.is_empty() {
            DEFAULT_SCALES.to_vec()
        } else {
            self.scales.clone()
        };

        let by_scale = cluster_scales(&objs, self.radius, &scales, Extent::WORLD)?;

        let mut rendered = Map::with_capacity(by_scale.len());
        for (scale, bunches) in &by_scale {
            rendered.insert(scale.to_string(), serde_json::to_value(bunches)?);
        }
        emit_json(&Value::Object(rendered), self.output.as_deref())
    }
}

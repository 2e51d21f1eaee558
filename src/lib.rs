//! Clustermap - marker clustering and map-widget wiring for news-item maps
//!
//! Clustermap prepares geocoded news items for display on a slippy map. It
//! covers both ends of the pipeline:
//!
//! - On the server side, it groups items into "bunches" (clusters of nearby
//!   markers) at each configured map scale and serializes the result, together
//!   with an id-to-metadata table, as the JSON payload a page embeds.
//! - On the page side, it wires that payload onto a map: it builds the
//!   metadata table, derives the identifier list, constructs a content fetcher
//!   bound to those identifiers, constructs a cluster layer backed by the
//!   fetcher, seeds the layer with the bunches, and registers the layer on the
//!   map.
//!
//! The crate never talks to a concrete mapping library. The page wiring
//! depends only on the narrow capability traits in [`layer`]
//! ([`layer::MapLibrary`], [`layer::MapHandle`], [`layer::ClusterLayer`],
//! [`layer::ContentFetcher`]); an adapter around whichever mapping library the
//! page actually uses satisfies them.
//!
//! # Core Modules
//!
//! - [`newsitem`] - News-item records and the id-to-metadata index
//! - [`clustering`] - Buffer clustering and per-scale cluster maps
//! - [`geo`] - Map scales, resolutions, and pixel projection
//! - [`layer`] - Capability traits for the mapping-library seam
//! - [`page`] - The page initializer and the embedded payload
//!
//! # Supporting Modules
//!
//! - [`cli`] - Command-line interface (`cluster` and `page` commands)
//! - [`core`] - Error types and user-friendly error reporting
//!
//! # Example
//!
//! ```rust,no_run
//! use clustermap::page::{PageContext, init_cluster_map};
//! use clustermap::layer::{MapHandle, MapLibrary};
//!
//! # fn example(
//! #     map: &mut dyn MapHandle,
//! #     library: &dyn MapLibrary,
//! # ) -> anyhow::Result<()> {
//! let ctx: PageContext = serde_json::from_str(
//!     r#"{"all_bunches": [], "newsitem_list": [{"id": 12345, "schema": {"id": 10}}]}"#,
//! )?;
//!
//! // Builds the metadata table, wires the fetcher and layer, registers the
//! // layer on the map, and hands the table back for other page scripts.
//! let assets = init_cluster_map(&ctx, map, library)?;
//! assert_eq!(assets.newsitems.ids(), [12345]);
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod clustering;
pub mod core;
pub mod geo;
pub mod layer;
pub mod newsitem;
pub mod page;

// Supporting modules
pub mod cli;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

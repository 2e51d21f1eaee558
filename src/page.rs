//! Page initialization for the cluster widget.
//!
//! A page that shows a cluster map embeds one JSON payload
//! ([`page_payload`]) and runs one initialization routine
//! ([`init_cluster_map`]) against it. The routine performs the same six
//! steps in the same order every time:
//!
//! 1. build the id-to-metadata table from the news-item list;
//! 2. extract the identifier list from the table;
//! 3. construct a content fetcher bound to those ids and the map;
//! 4. construct a cluster layer named [`CLUSTER_LAYER_NAME`] backed by the
//!    fetcher, with no extra options;
//! 5. seed the layer with the bunches, unmodified;
//! 6. register the layer on the map.
//!
//! There is no recovery path: the first adapter error propagates out and the
//! remaining steps never run. An empty news-item list is not an error; the
//! layer is still constructed and registered, just with nothing to fetch.
//!
//! Instead of parking the metadata table on a page-global namespace for
//! other scripts to find, the routine returns it as [`PageAssets`] and the
//! caller passes it to whatever else needs it.

use crate::clustering::Bunch;
use crate::layer::{CLUSTER_LAYER_NAME, MapHandle, MapLibrary};
use crate::newsitem::{NewsItem, NewsItemIndex};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

/// The data a cluster-map page is initialized from.
///
/// Matches the embedded payload produced by [`page_payload`]: the bunch list
/// (opaque to the wiring, handed to the layer as-is) and the news-item list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageContext {
    /// Pre-clustered bunches for the page's scales
    pub all_bunches: Vec<Bunch>,
    /// The news items shown on the page
    pub newsitem_list: Vec<NewsItem>,
}

/// Page-scoped data produced by initialization.
///
/// Handed back to the caller for other page scripts, replacing what used to
/// be a mutable global.
#[derive(Debug, Clone)]
pub struct PageAssets {
    /// The id-to-metadata table built from the page's news items
    pub newsitems: NewsItemIndex,
}

/// Wire the cluster widget onto a map.
///
/// See the [module docs](self) for the exact step order. The identifier list
/// handed to the fetcher preserves the order of `newsitem_list`.
///
/// # Errors
///
/// Propagates the first adapter failure (fetcher construction, layer
/// construction, bunch seeding, or layer registration) without attempting
/// any of the remaining steps.
///
/// # Examples
///
/// ```rust,no_run
/// use clustermap::page::{PageContext, init_cluster_map};
/// # use clustermap::layer::{MapHandle, MapLibrary};
///
/// # fn example(map: &mut dyn MapHandle, library: &dyn MapLibrary) -> anyhow::Result<()> {
/// let ctx = PageContext::default();
/// let assets = init_cluster_map(&ctx, map, library)?;
/// assert!(assets.newsitems.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn init_cluster_map(
    ctx: &PageContext,
    map: &mut dyn MapHandle,
    library: &dyn MapLibrary,
) -> Result<PageAssets> {
    let newsitems = NewsItemIndex::from_items(&ctx.newsitem_list);
    let ids = newsitems.ids().to_vec();
    debug!(
        ids = ids.len(),
        bunches = ctx.all_bunches.len(),
        "initializing cluster map"
    );

    let fetcher = library.content_fetcher(ids, map)?;
    let mut layer = library.cluster_layer(CLUSTER_LAYER_NAME, None, fetcher)?;
    layer.add_bunches(&ctx.all_bunches)?;
    map.add_layer(layer)?;

    Ok(PageAssets { newsitems })
}

/// Render the JSON payload a cluster-map page embeds.
///
/// ```json
/// {
///   "all_bunches": [[[12345], [-87.64, 41.88]]],
///   "newsitems": {"12345": {"schema_id": 10}}
/// }
/// ```
///
/// # Errors
///
/// Fails only if bunch serialization fails, which does not happen for
/// well-formed bunches.
pub fn page_payload(newsitem_list: &[NewsItem], bunches: &[Bunch]) -> Result<Value> {
    let newsitems = NewsItemIndex::from_items(newsitem_list);
    Ok(json!({
        "all_bunches": serde_json::to_value(bunches)?,
        "newsitems": newsitems.to_json(),
    }))
}

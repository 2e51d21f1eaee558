//! Capability traits for the mapping-library seam.
//!
//! The page wiring in [`page`](crate::page) never touches a concrete mapping
//! library. It depends on the four narrow traits here, and an adapter around
//! whichever library the page uses (OpenLayers, Leaflet, an in-house widget)
//! implements them. Tests implement them with recording doubles.
//!
//! The shape of the seam mirrors the calls a cluster widget needs:
//!
//! - [`MapLibrary`] constructs a [`ContentFetcher`] bound to the identifier
//!   list and a [`ClusterLayer`] backed by that fetcher.
//! - [`ClusterLayer::add_bunches`] seeds the layer with cluster data.
//! - [`MapHandle::add_layer`] registers the layer and takes ownership of it.
//!
//! Constructing a fetcher must not perform any I/O; actual content retrieval
//! happens later inside the layer's own lifecycle, which this crate does not
//! model.

use crate::clustering::Bunch;
use crate::newsitem::ItemId;
use anyhow::Result;

/// Name of the cluster layer registered on the map.
pub const CLUSTER_LAYER_NAME: &str = "clusters";

/// Retrieves item content for the layer on demand.
///
/// A fetcher is bound to its identifier list at construction time.
/// Construction is side-effect free; when and how the fetcher goes to the
/// network belongs to the mapping library.
pub trait ContentFetcher {
    /// The identifiers this fetcher was bound to, in construction order.
    fn ids(&self) -> &[ItemId];
}

/// A map layer that renders bunches as cluster markers.
pub trait ClusterLayer {
    /// The layer's name.
    fn name(&self) -> &str;

    /// Seed the layer with bunch data.
    ///
    /// Bunches are passed through exactly as the caller holds them; the
    /// layer owns any grouping or rendering decisions from here on.
    ///
    /// # Errors
    ///
    /// Adapter-defined. Errors abort page initialization.
    fn add_bunches(&mut self, bunches: &[Bunch]) -> Result<()>;
}

/// Handle to the page's map object.
pub trait MapHandle {
    /// Register a layer on the map, transferring ownership.
    ///
    /// # Errors
    ///
    /// Adapter-defined. Errors abort page initialization.
    fn add_layer(&mut self, layer: Box<dyn ClusterLayer>) -> Result<()>;
}

/// Factory half of the mapping-library adapter.
pub trait MapLibrary {
    /// Construct a content fetcher bound to `ids` and the given map.
    ///
    /// Must not perform I/O.
    ///
    /// # Errors
    ///
    /// Adapter-defined. Errors abort page initialization.
    fn content_fetcher(
        &self,
        ids: Vec<ItemId>,
        map: &dyn MapHandle,
    ) -> Result<Box<dyn ContentFetcher>>;

    /// Construct a cluster layer backed by `fetcher`.
    ///
    /// `options` is opaque, library-specific configuration; the cluster
    /// widget passes `None`.
    ///
    /// # Errors
    ///
    /// Adapter-defined. Errors abort page initialization.
    fn cluster_layer(
        &self,
        name: &str,
        options: Option<serde_json::Value>,
        fetcher: Box<dyn ContentFetcher>,
    ) -> Result<Box<dyn ClusterLayer>>;
}

//! Marker clustering for map display.
//!
//! Items that sit close together on screen collapse into a single "bunch"
//! marker. What counts as close depends on zoom, so clustering runs once per
//! configured map scale: positions are projected into that scale's pixel
//! grid, clustered with a pixel radius by [`buffer_cluster`], and the bunch
//! centers are projected back into lng/lat for the map to place.
//!
//! The per-scale results ([`cluster_scales`]) are what a page embeds as its
//! `all_bunches` payload.
//!
//! # Examples
//!
//! ```rust
//! use clustermap::clustering::{cluster_scales, has_clusters};
//! use clustermap::geo::Extent;
//!
//! let objs = vec![
//!     (12345, (-87.64, 41.88)),
//!     (23456, (-87.63, 41.87)),
//!     (34567, (122.41, 37.77)),
//! ];
//!
//! let by_scale = cluster_scales(&objs, 20.0, &[614_400, 19_200], Extent::WORLD)?;
//! assert_eq!(by_scale.len(), 2);
//! assert!(has_clusters(&by_scale));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod bunch;
pub mod cluster;

pub use bunch::Bunch;
pub use cluster::{buffer_cluster, buffer_cluster_with, euclidean_distance};

use crate::core::ClustermapError;
use crate::geo::{Extent, Units, lnglat_from_px, px_from_lnglat, resolution_for_scale};
use crate::newsitem::{ItemId, Point};
use std::collections::BTreeMap;
use tracing::debug;

/// Bunches per map scale, keyed by the scale's `1/n` denominator.
pub type ScaleBunches = BTreeMap<u32, Vec<Bunch>>;

/// Cluster objects at a single map scale.
///
/// `objs` are `(id, (lng, lat))` pairs; `radius_px` is the buffer radius in
/// screen pixels. Returned bunch centers are back in lng/lat space.
///
/// # Errors
///
/// Returns [`ClustermapError::InvalidScale`] for a non-positive scale and
/// [`ClustermapError::InvalidRadius`] for a negative or non-finite radius.
pub fn cluster_by_scale(
    objs: &[(ItemId, Point)],
    radius_px: f64,
    scale: u32,
    extent: Extent,
) -> Result<Vec<Bunch>, ClustermapError> {
    let resolution = resolution_for_scale(f64::from(scale), Units::Degrees)?;

    let projected: Vec<(ItemId, Point)> = objs
        .iter()
        .map(|&(id, lnglat)| (id, px_from_lnglat(lnglat, resolution, extent)))
        .collect();

    let mut bunches = buffer_cluster(&projected, radius_px)?;
    for bunch in &mut bunches {
        bunch.set_center(lnglat_from_px(bunch.center(), resolution, extent));
    }

    debug!(scale, bunches = bunches.len(), "clustered at scale");
    Ok(bunches)
}

/// Cluster objects at each of the given scales.
///
/// # Errors
///
/// Fails on the first invalid scale or radius; no partial result is
/// returned.
pub fn cluster_scales(
    objs: &[(ItemId, Point)],
    radius_px: f64,
    scales: &[u32],
    extent: Extent,
) -> Result<ScaleBunches, ClustermapError> {
    let mut by_scale = ScaleBunches::new();
    for &scale in scales {
        by_scale.insert(scale, cluster_by_scale(objs, radius_px, scale, extent)?);
    }
    Ok(by_scale)
}

/// Whether any scale produced at least one bunch.
///
/// Catches the case where nothing in the input was geocoded: every scale is
/// present but maps to an empty list.
#[must_use]
pub fn has_clusters(by_scale: &ScaleBunches) -> bool {
    by_scale.values().any(|bunches| !bunches.is_empty())
}

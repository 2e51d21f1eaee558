//! Buffer clustering.
//!
//! [`buffer_cluster`] groups objects into bunches by distance alone: an
//! object joins the first existing bunch whose center lies within the buffer
//! radius, otherwise it starts a new bunch. Unlike k-means, the number of
//! bunches is not fixed up front; it falls out of the radius. A larger radius
//! produces fewer, fuller bunches.
//!
//! The pass is greedy and single-sweep, so the result is deterministic for a
//! given input order. Because each insertion moves the joined bunch's center,
//! two different orderings of the same points can legitimately produce
//! different bunches.

use super::bunch::Bunch;
use crate::core::ClustermapError;
use crate::newsitem::{ItemId, Point};

/// Euclidean distance between two points.
#[must_use]
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Cluster objects into bunches within a buffer of the given radius.
///
/// Objects are `(id, point)` pairs; points and the radius share one
/// coordinate system (for map work that is pixel space, see
/// [`cluster_by_scale`](super::cluster_by_scale)).
///
/// An empty input produces an empty result. A radius of zero degenerates to
/// one bunch per distinct point.
///
/// # Errors
///
/// Returns [`ClustermapError::InvalidRadius`] if the radius is negative or
/// not finite.
pub fn buffer_cluster(
    objects: &[(ItemId, Point)],
    radius: f64,
) -> Result<Vec<Bunch>, ClustermapError> {
    buffer_cluster_with(objects, radius, euclidean_distance)
}

/// [`buffer_cluster`] with a caller-supplied distance function.
pub fn buffer_cluster_with(
    objects: &[(ItemId, Point)],
    radius: f64,
    dist_fn: impl Fn(Point, Point) -> f64,
) -> Result<Vec<Bunch>, ClustermapError> {
    if !radius.is_finite() || radius < 0.0 {
        return Err(ClustermapError::InvalidRadius { radius });
    }

    let mut bunches: Vec<Bunch> = Vec::new();
    for &(id, point) in objects {
        let joined = bunches
            .iter_mut()
            .find(|bunch| dist_fn(point, bunch.center()) <= radius);
        match joined {
            Some(bunch) => bunch.add(id, point),
            None => bunches.push(Bunch::new(id, point)),
        }
    }

    tracing::trace!(
        objects = objects.len(),
        bunches = bunches.len(),
        radius,
        "buffer clustering done"
    );
    Ok(bunches)
}

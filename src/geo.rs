//! Map scales, resolutions, and pixel projection.
//!
//! Marker clustering happens in pixel space: a pixel radius means the same
//! visual distance at every zoom level, so lng/lat positions are projected
//! into the pixel grid of a given map scale before clustering and bunch
//! centers are projected back afterwards. This module holds the scale and
//! resolution arithmetic that projection rests on.
//!
//! Scales are representative-fraction denominators: a scale of `19200` means
//! `1/19200`. [`DEFAULT_SCALES`] lists the zoom levels a typical deployment
//! configures, from widest (`614400`) to tightest (`1200`).

use crate::core::ClustermapError;
use crate::newsitem::Point;

/// Screen resolution assumed by the scale math.
pub const DOTS_PER_INCH: f64 = 72.0;

/// The default set of map scales (1/n denominators), widest first.
pub const DEFAULT_SCALES: [u32; 10] = [
    614_400, 307_200, 153_600, 76_800, 38_400, 19_200, 9_600, 4_800, 2_400, 1_200,
];

/// Ground units a scale can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    /// Inches
    Inches,
    /// Feet
    Feet,
    /// Miles
    Miles,
    /// Meters
    Meters,
    /// Kilometers
    Kilometers,
    /// Decimal degrees (the default for lng/lat maps)
    #[default]
    Degrees,
}

impl Units {
    /// Inches per one unit of ground distance.
    #[must_use]
    pub fn inches_per_unit(self) -> f64 {
        match self {
            Units::Inches => 1.0,
            Units::Feet => 12.0,
            Units::Miles => 63_360.0,
            Units::Meters => 39.3701,
            Units::Kilometers => 39_370.1,
            Units::Degrees => 4_374_754.0,
        }
    }
}

/// A geographic bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Western edge (min longitude)
    pub west: f64,
    /// Southern edge (min latitude)
    pub south: f64,
    /// Eastern edge (max longitude)
    pub east: f64,
    /// Northern edge (max latitude)
    pub north: f64,
}

impl Extent {
    /// The whole world in decimal degrees.
    pub const WORLD: Extent = Extent {
        west: -180.0,
        south: -90.0,
        east: 180.0,
        north: 90.0,
    };
}

impl Default for Extent {
    fn default() -> Self {
        Self::WORLD
    }
}

/// Normalize a scale to its fractional `1/n` representation.
///
/// Accepts either form: `19200` and `1.0 / 19200.0` both normalize to the
/// latter.
#[must_use]
pub fn normalize_scale(scale: f64) -> f64 {
    if scale >= 1.0 { 1.0 / scale } else { scale }
}

/// Resolution (ground units per pixel) for a scale.
///
/// # Errors
///
/// Returns [`ClustermapError::InvalidScale`] for zero, negative, or
/// non-finite scales.
pub fn resolution_for_scale(scale: f64, units: Units) -> Result<f64, ClustermapError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ClustermapError::InvalidScale { scale });
    }
    Ok(1.0 / (normalize_scale(scale) * units.inches_per_unit() * DOTS_PER_INCH))
}

/// Scale for a resolution, the inverse of [`resolution_for_scale`].
#[must_use]
pub fn scale_for_resolution(resolution: f64, units: Units) -> f64 {
    resolution * units.inches_per_unit() * DOTS_PER_INCH
}

/// Project a `(lng, lat)` pair into pixel space at the given resolution.
///
/// Pixel origin is the top-left corner of the extent; coordinates are rounded
/// to whole pixels.
#[must_use]
pub fn px_from_lnglat(lnglat: Point, resolution: f64, extent: Extent) -> Point {
    (
        ((lnglat.0 - extent.west) / resolution).round(),
        ((extent.north - lnglat.1) / resolution).round(),
    )
}

/// Project a pixel pair back into `(lng, lat)` space.
///
/// Inverse of [`px_from_lnglat`] up to rounding: positions are recentered on
/// the extent's pixel midpoint, using the same rounded width and height the
/// forward projection produces.
#[must_use]
pub fn lnglat_from_px(px: Point, resolution: f64, extent: Extent) -> Point {
    let w = (extent.east / resolution).round() - (extent.west / resolution).round();
    let h = (extent.north / resolution).round() - (extent.south / resolution).round();
    (
        (px.0 - w / 2.0) * resolution,
        -(px.1 - h / 2.0) * resolution,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_scale_accepts_both_forms() {
        assert!((normalize_scale(19_200.0) - 1.0 / 19_200.0).abs() < 1e-12);
        assert!((normalize_scale(1.0 / 19_200.0) - 1.0 / 19_200.0).abs() < 1e-12);
    }

    #[test]
    fn resolution_round_trips_through_scale() {
        let res = resolution_for_scale(19_200.0, Units::Degrees).unwrap();
        let scale = scale_for_resolution(res, Units::Degrees);
        assert!((scale - 1.0 / 19_200.0).abs() < 1e-9);
    }

    #[test]
    fn resolution_rejects_bad_scales() {
        assert!(resolution_for_scale(0.0, Units::Degrees).is_err());
        assert!(resolution_for_scale(-5.0, Units::Degrees).is_err());
        assert!(resolution_for_scale(f64::NAN, Units::Degrees).is_err());
    }

    #[test]
    fn px_projection_origin_is_top_left() {
        let extent = Extent::WORLD;
        // One degree per pixel makes the math readable.
        let res = 1.0;
        assert_eq!(px_from_lnglat((-180.0, 90.0), res, extent), (0.0, 0.0));
        assert_eq!(px_from_lnglat((180.0, -90.0), res, extent), (360.0, 180.0));
        assert_eq!(px_from_lnglat((0.0, 0.0), res, extent), (180.0, 90.0));
    }

    #[test]
    fn px_projection_round_trips_center() {
        let extent = Extent::WORLD;
        let res = 1.0;
        let px = px_from_lnglat((0.0, 0.0), res, extent);
        assert_eq!(lnglat_from_px(px, res, extent), (0.0, 0.0));
    }

    #[test]
    fn default_scales_descend() {
        for pair in DEFAULT_SCALES.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }
}

//! The [`Bunch`] data structure.

use crate::newsitem::{ItemId, Point};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bunch is a group of items that knows its center point, maintained as
/// the mean of its members' points.
///
/// Bunches are what the cluster layer renders as a single marker. On the
/// wire a bunch is the two-element array `[objects, center]`:
///
/// ```json
/// [[12345, 23456], [-87.64, 41.88]]
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bunch {
    objects: Vec<ItemId>,
    points: Vec<Point>,
    center: Point,
}

impl Bunch {
    /// Create a bunch containing a single item.
    #[must_use]
    pub fn new(id: ItemId, point: Point) -> Self {
        Self {
            objects: vec![id],
            points: vec![point],
            center: point,
        }
    }

    /// Add an item and recompute the center.
    pub fn add(&mut self, id: ItemId, point: Point) {
        self.objects.push(id);
        self.points.push(point);
        self.update_center();
    }

    fn update_center(&mut self) {
        let n = self.points.len() as f64;
        let (sum_x, sum_y) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.0, sy + p.1));
        self.center = (sum_x / n, sum_y / n);
    }

    /// Ids of the items in this bunch, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[ItemId] {
        &self.objects
    }

    /// The bunch's center point.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Move the center, e.g. after projecting it into another space.
    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    /// X coordinate of the center.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.center.0
    }

    /// Y coordinate of the center.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.center.1
    }

    /// Number of items in the bunch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the bunch is empty. A freshly constructed bunch never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl fmt::Display for Bunch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.objects.iter().take(3).collect::<Vec<_>>();
        let ellipsis = if self.objects.len() > 3 { ", ..." } else { "" };
        write!(
            f,
            "<Bunch: {shown:?}{ellipsis}, center: ({:.3}, {:.3})>",
            self.x(),
            self.y()
        )
    }
}

// Wire form is [objects, center]; member points are a clustering detail and
// are not serialized.
impl Serialize for Bunch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.objects)?;
        tuple.serialize_element(&self.center)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for Bunch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BunchVisitor;

        impl<'de> Visitor<'de> for BunchVisitor {
            type Value = Bunch;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a two-element array [objects, center]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Bunch, A::Error> {
                let objects: Vec<ItemId> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let center: Point = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                Ok(Bunch {
                    objects,
                    points: Vec::new(),
                    center,
                })
            }
        }

        deserializer.deserialize_tuple(2, BunchVisitor)
    }
}

//! News-item records and the id-to-metadata index.
//!
//! A page that shows clustered news items embeds two pieces of data: the
//! bunches themselves and a small lookup table mapping each item id to the
//! attributes other page scripts need (currently just the item's schema id).
//! This module owns that table.
//!
//! [`NewsItemIndex`] is built once from the server's item list and never
//! mutated afterward. It remembers the order ids first appeared, so the
//! identifier list handed to the content fetcher matches the order items were
//! rendered in. Enumerating hash-table keys instead would make the order
//! implementation-defined, which is exactly the kind of latent surprise the
//! index exists to avoid.
//!
//! # Examples
//!
//! ```rust
//! use clustermap::newsitem::{NewsItem, NewsItemIndex};
//!
//! let items: Vec<NewsItem> = serde_json::from_str(
//!     r#"[
//!         {"id": 12345, "schema": {"id": 10}},
//!         {"id": 23456, "schema": {"id": 4}, "location": [-87.6, 41.9]}
//!     ]"#,
//! )?;
//!
//! let index = NewsItemIndex::from_items(&items);
//! assert_eq!(index.ids(), [12345, 23456]);
//! assert_eq!(index.get(12345).unwrap().schema_id, 10);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::HashMap;

/// Identifier of a news item.
pub type ItemId = i64;

/// A coordinate pair. Serializes as a two-element JSON array.
///
/// The interpretation depends on context: `(lng, lat)` for geographic
/// coordinates, `(x, y)` for pixel space after projection.
pub type Point = (f64, f64);

/// Reference to the schema (item category) a news item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    /// Schema identifier
    pub id: i64,
}

/// A news item as delivered by the server.
///
/// Only the fields this crate consumes are modeled: the item id, its schema,
/// and an optional geocoded location. Items without a location still appear
/// in the metadata table but are skipped by clustering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Item identifier
    pub id: ItemId,
    /// The item's schema
    pub schema: SchemaRef,
    /// Geocoded `(lng, lat)` position, if the item was geocoded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
}

/// Per-item metadata exposed to other page scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItemMeta {
    /// Schema id of the item
    pub schema_id: i64,
}

/// Immutable id-to-metadata table with a stable identifier order.
///
/// Built once at page-initialization time; the page wiring derives the
/// content fetcher's identifier list from it and hands the whole table back
/// to the caller as part of the page assets.
///
/// Duplicate ids in the input follow plain table-insertion semantics: the
/// last metadata value wins, while the id keeps the position of its first
/// occurrence. Every id appears exactly once in [`ids`](Self::ids).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsItemIndex {
    entries: HashMap<ItemId, NewsItemMeta>,
    order: Vec<ItemId>,
}

impl NewsItemIndex {
    /// Build the index from a list of news items.
    #[must_use]
    pub fn from_items(items: &[NewsItem]) -> Self {
        let mut index = Self::default();
        for item in items {
            index.insert(item.id, NewsItemMeta {
                schema_id: item.schema.id,
            });
        }
        tracing::debug!(items = items.len(), ids = index.len(), "built news-item index");
        index
    }

    fn insert(&mut self, id: ItemId, meta: NewsItemMeta) {
        if self.entries.insert(id, meta).is_none() {
            self.order.push(id);
        }
    }

    /// Look up the metadata for an item.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&NewsItemMeta> {
        self.entries.get(&id)
    }

    /// The identifier list, in the order ids first appeared in the input.
    #[must_use]
    pub fn ids(&self) -> &[ItemId] {
        &self.order
    }

    /// Number of distinct ids in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Render the table as the JSON object the page embeds.
    ///
    /// Keys are stringified ids, values are `{"schema_id": N}` records:
    ///
    /// ```json
    /// {"12345": {"schema_id": 10}, "23456": {"schema_id": 4}}
    /// ```
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut table = Map::with_capacity(self.order.len());
        for id in &self.order {
            // Every ordered id has an entry; insert() maintains that.
            if let Some(meta) = self.entries.get(id) {
                table.insert(id.to_string(), json!({ "schema_id": meta.schema_id }));
            }
        }
        Value::Object(table)
    }
}

/// Extract `(id, point)` pairs for the geocoded items, preserving input order.
///
/// This is the clustering input: items without a location are skipped.
#[must_use]
pub fn geocoded(items: &[NewsItem]) -> Vec<(ItemId, Point)> {
    items
        .iter()
        .filter_map(|item| item.location.map(|point| (item.id, point)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, schema_id: i64) -> NewsItem {
        NewsItem {
            id,
            schema: SchemaRef { id: schema_id },
            location: None,
        }
    }

    #[test]
    fn every_id_appears_exactly_once() {
        let items = vec![item(12345, 10), item(23456, 4)];
        let index = NewsItemIndex::from_items(&items);

        assert_eq!(index.len(), 2);
        assert_eq!(index.ids(), [12345, 23456]);
        assert_eq!(index.get(12345), Some(&NewsItemMeta { schema_id: 10 }));
        assert_eq!(index.get(23456), Some(&NewsItemMeta { schema_id: 4 }));
    }

    #[test]
    fn duplicate_ids_last_write_wins_first_position_kept() {
        let items = vec![item(1, 10), item(2, 20), item(1, 99)];
        let index = NewsItemIndex::from_items(&items);

        assert_eq!(index.ids(), [1, 2]);
        assert_eq!(index.get(1), Some(&NewsItemMeta { schema_id: 99 }));
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = NewsItemIndex::from_items(&[]);
        assert!(index.is_empty());
        assert!(index.ids().is_empty());
        assert_eq!(index.to_json(), serde_json::json!({}));
    }

    #[test]
    fn to_json_matches_page_payload_shape() {
        let items = vec![item(12345, 10), item(23456, 4)];
        let index = NewsItemIndex::from_items(&items);

        assert_eq!(
            index.to_json(),
            serde_json::json!({
                "12345": {"schema_id": 10},
                "23456": {"schema_id": 4},
            })
        );
    }

    #[test]
    fn geocoded_skips_items_without_location() {
        let mut items = vec![item(1, 10), item(2, 20), item(3, 30)];
        items[0].location = Some((-87.6, 41.9));
        items[2].location = Some((0.0, 0.0));

        let objs = geocoded(&items);
        assert_eq!(objs, vec![(1, (-87.6, 41.9)), (3, (0.0, 0.0))]);
    }

    #[test]
    fn newsitem_deserializes_without_location() {
        let ni: NewsItem = serde_json::from_str(r#"{"id": 7, "schema": {"id": 3}}"#).unwrap();
        assert_eq!(ni.id, 7);
        assert_eq!(ni.schema.id, 3);
        assert!(ni.location.is_none());
    }
}

//! Canned news-item data for tests.

use crate::newsitem::{NewsItem, SchemaRef};

/// A small, mostly-geocoded news-item set.
///
/// Items 1 and 2 sit a couple hundredths of a degree apart (they cluster at
/// wide scales), item 3 is across the world, and item 4 has no location.
#[must_use]
pub fn sample_newsitems() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 12345,
            schema: SchemaRef { id: 10 },
            location: Some((-87.64, 41.88)),
        },
        NewsItem {
            id: 23456,
            schema: SchemaRef { id: 4 },
            location: Some((-87.63, 41.87)),
        },
        NewsItem {
            id: 34567,
            schema: SchemaRef { id: 4 },
            location: Some((122.41, 37.77)),
        },
        NewsItem {
            id: 45678,
            schema: SchemaRef { id: 7 },
            location: None,
        },
    ]
}

/// [`sample_newsitems`] as the JSON a CLI input file would hold.
#[must_use]
pub fn sample_newsitems_json() -> String {
    serde_json::to_string_pretty(&sample_newsitems()).unwrap_or_default()
}

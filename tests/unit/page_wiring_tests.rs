//! End-to-end wiring tests against the public API, using the recording
//! doubles from `test_utils`.

use clustermap::clustering::Bunch;
use clustermap::layer::CLUSTER_LAYER_NAME;
use clustermap::newsitem::{NewsItem, SchemaRef};
use clustermap::page::{PageContext, init_cluster_map};
use clustermap::test_utils::init_test_logging;
use clustermap::test_utils::mock_map::{Event, RecordingLibrary, RecordingMap};

fn item(id: i64, schema_id: i64) -> NewsItem {
    NewsItem {
        id,
        schema: SchemaRef { id: schema_id },
        location: None,
    }
}

#[test]
fn full_wiring_for_a_two_item_page() {
    init_test_logging(None);

    let ctx = PageContext {
        all_bunches: vec![],
        newsitem_list: vec![item(12345, 10), item(23456, 4)],
    };
    let library = RecordingLibrary::new();
    let mut map = RecordingMap::new(library.log());

    let assets = init_cluster_map(&ctx, &mut map, &library).unwrap();

    // The metadata table covers both items.
    assert_eq!(assets.newsitems.get(12345).unwrap().schema_id, 10);
    assert_eq!(assets.newsitems.get(23456).unwrap().schema_id, 4);

    // The fetcher saw the ids in input order, the layer got the canonical
    // name, and the map ended up with exactly one layer.
    let events = library.events();
    assert_eq!(events[0], Event::FetcherConstructed {
        ids: vec![12345, 23456]
    });
    assert!(matches!(
        &events[1],
        Event::LayerConstructed { name, options: None } if name == CLUSTER_LAYER_NAME
    ));
    assert_eq!(map.layer_names(), vec![CLUSTER_LAYER_NAME.to_string()]);
}

#[test]
fn identifier_list_matches_table_keys() {
    let ctx = PageContext {
        all_bunches: vec![],
        newsitem_list: vec![item(5, 1), item(3, 2), item(9, 3)],
    };
    let library = RecordingLibrary::new();
    let mut map = RecordingMap::new(library.log());

    let assets = init_cluster_map(&ctx, &mut map, &library).unwrap();

    let mut from_table: Vec<i64> = assets.newsitems.ids().to_vec();
    let events = library.events();
    let Event::FetcherConstructed { ids } = &events[0] else {
        panic!("fetcher construction was not the first call");
    };
    let mut from_fetcher = ids.clone();

    from_table.sort_unstable();
    from_fetcher.sort_unstable();
    assert_eq!(from_table, from_fetcher);
}

#[test]
fn bunches_reach_the_layer_untouched() {
    let mut b1 = Bunch::new(1, (0.0, 0.0));
    b1.add(2, (2.0, 2.0));
    let b2 = Bunch::new(3, (50.0, 50.0));

    let ctx = PageContext {
        all_bunches: vec![b1.clone(), b2.clone()],
        newsitem_list: vec![item(1, 1), item(2, 1), item(3, 2)],
    };
    let library = RecordingLibrary::new();
    let mut map = RecordingMap::new(library.log());

    init_cluster_map(&ctx, &mut map, &library).unwrap();

    assert_eq!(library.seeded_bunches(), vec![b1, b2]);
}

#[test]
fn empty_page_is_wired_without_errors() {
    let library = RecordingLibrary::new();
    let mut map = RecordingMap::new(library.log());

    let assets = init_cluster_map(&PageContext::default(), &mut map, &library).unwrap();

    assert!(assets.newsitems.is_empty());
    assert_eq!(library.events(), vec![
        Event::FetcherConstructed { ids: vec![] },
        Event::LayerConstructed {
            name: CLUSTER_LAYER_NAME.to_string(),
            options: None,
        },
        Event::BunchesAdded { count: 0 },
        Event::LayerRegistered {
            name: CLUSTER_LAYER_NAME.to_string(),
        },
    ]);
}

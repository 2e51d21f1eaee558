//! Payload and clustering tests against the public API.

use clustermap::clustering::{cluster_scales, has_clusters};
use clustermap::geo::Extent;
use clustermap::newsitem::geocoded;
use clustermap::page::{PageContext, page_payload};
use clustermap::test_utils::sample_newsitems;

#[test]
fn payload_lists_every_item_id_exactly_once() {
    let items = sample_newsitems();
    let payload = page_payload(&items, &[]).unwrap();

    let table = payload["newsitems"].as_object().unwrap();
    assert_eq!(table.len(), items.len());
    for item in &items {
        let meta = &table[&item.id.to_string()];
        assert_eq!(meta["schema_id"], item.schema.id);
    }
    assert_eq!(payload["all_bunches"], serde_json::json!([]));
}

#[test]
fn payload_parses_back_as_a_page_context() {
    let items = sample_newsitems();
    let objs = geocoded(&items);
    let by_scale = cluster_scales(&objs, 20.0, &[614_400], Extent::WORLD).unwrap();
    let bunches = by_scale[&614_400].clone();

    let payload = page_payload(&items, &bunches).unwrap();

    // The bunch half of the payload round-trips into the context struct the
    // page initializer consumes. (The newsitems half is keyed metadata, not
    // the raw item list, so only all_bunches carries over.)
    let ctx: PageContext = serde_json::from_value(serde_json::json!({
        "all_bunches": payload["all_bunches"],
        "newsitem_list": items,
    }))
    .unwrap();
    assert_eq!(ctx.all_bunches.len(), bunches.len());
}

#[test]
fn sample_set_clusters_at_wide_scales() {
    let items = sample_newsitems();
    let objs = geocoded(&items);

    // Item 4 has no location and must not reach clustering.
    assert_eq!(objs.len(), 3);

    let by_scale = cluster_scales(&objs, 20.0, &[614_400], Extent::WORLD).unwrap();
    assert!(has_clusters(&by_scale));

    let bunches = &by_scale[&614_400];
    assert_eq!(bunches.len(), 2);
    assert_eq!(bunches[0].objects(), [12345, 23456]);
    assert_eq!(bunches[1].objects(), [34567]);
}

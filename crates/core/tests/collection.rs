use hangar_api::{Asset, AssetLookup, ItemId, Location, LocationFlag};
use hangar_core::{AssetCollection, AssetNode};

const LOCATION_1: i64 = 100000;
const LOCATION_2: i64 = 101000;

fn sorted_ids(nodes: &[AssetNode<'_>]) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = nodes.iter().map(AssetNode::item_id).collect();
    ids.sort_unstable();
    ids
}

fn two_station_collection() -> AssetCollection {
    let assets = vec![
        Asset::new(1, LOCATION_1),
        Asset::new(2, LOCATION_1),
        Asset::new(11, 1),
        Asset::new(111, 11).with_quantity(3),
        Asset::new(1111, 111),
        Asset::new(3, LOCATION_2),
        Asset::new(31, 3),
    ];
    let locations = vec![
        Location::new(LOCATION_1, "Alpha"),
        Location::new(LOCATION_2, "Bravo"),
    ];
    AssetCollection::new(assets, locations)
}

#[test]
fn builds_one_tree_per_location() {
    let collection = two_station_collection();
    assert_eq!(collection.locations().len(), 2);

    let alpha = collection.location(LOCATION_1).unwrap();
    assert_eq!(alpha.location().name, "Alpha");
    assert_eq!(sorted_ids(&alpha.children()), vec![1, 2]);

    let a1 = collection.asset(1).unwrap();
    assert_eq!(sorted_ids(&a1.children()), vec![11]);
    let a11 = a1.children()[0];
    assert_eq!(sorted_ids(&a11.children()), vec![111]);
    let a111 = a11.children()[0];
    assert_eq!(sorted_ids(&a111.children()), vec![1111]);
    assert!(collection.asset(2).unwrap().children().is_empty());

    let bravo = collection.location(LOCATION_2).unwrap();
    assert_eq!(sorted_ids(&bravo.children()), vec![3]);
    assert_eq!(sorted_ids(&bravo.children()[0].children()), vec![31]);
}

#[test]
fn resolves_parent_location_at_any_depth() {
    let collection = two_station_collection();
    let alpha = collection.location(LOCATION_1);
    let bravo = collection.location(LOCATION_2);

    let cases = [
        (1, alpha),
        (2, alpha),
        (11, alpha),
        (111, alpha),
        (1111, alpha),
        (3, bravo),
        (31, bravo),
        (4, None),
        (666, None),
    ];
    for (item_id, expected) in cases {
        assert_eq!(collection.parent_location(item_id), expected, "item {item_id}");
    }
    assert_eq!(collection.parent_location_id(1111), Some(LOCATION_1));
    assert_eq!(collection.parent_location_id(4), None);
}

#[test]
fn returns_asset_nodes_by_item_id() {
    let collection = two_station_collection();
    for item_id in [1, 2, 11, 111, 1111, 3, 31] {
        let node = collection.asset(item_id).unwrap();
        assert_eq!(node.item_id(), item_id);
        assert_eq!(node.asset().item_id, item_id);
    }
    assert!(collection.asset(666).is_none());
    assert_eq!(collection.len(), 7);
}

#[test]
fn asset_knows_parent_and_root() {
    let collection = two_station_collection();
    let a111 = collection.asset(111).unwrap();
    assert_eq!(a111.parent().map(|p| p.item_id()), Some(11));
    assert_eq!(a111.root_location().map(|l| l.id()), Some(LOCATION_1));
    assert!(collection.asset(1).unwrap().parent().is_none());
}

#[test]
fn empty_input_gives_empty_collection() {
    let collection = AssetCollection::new(Vec::new(), Vec::new());
    assert!(collection.locations().is_empty());
    assert!(collection.parent_location(1).is_none());
    assert!(collection.location_ids().is_empty());
}

#[test]
fn location_without_assets_is_a_root() {
    let collection = AssetCollection::new(Vec::new(), vec![Location::new(LOCATION_1, "Alpha")]);
    let locations = collection.locations();
    assert_eq!(locations.len(), 1);
    assert!(locations[0].children().is_empty());
    assert_eq!(locations[0].size(), 0);
}

#[test]
fn asset_in_unknown_container_is_omitted() {
    let assets = vec![
        Asset::new(1, LOCATION_1),
        Asset::new(5, 424242),
        Asset::new(6, 5),
    ];
    let collection = AssetCollection::new(assets, vec![Location::new(LOCATION_1, "Alpha")]);

    for id in [5, 6] {
        assert!(collection.asset(id).is_none());
        assert!(collection.parent_location(id).is_none());
    }
    let alpha = collection.location(LOCATION_1).unwrap();
    assert_eq!(sorted_ids(&alpha.all()), vec![1]);
}

#[test]
fn asset_pointing_at_unlisted_location_is_omitted() {
    let assets = vec![Asset::new(1, LOCATION_1), Asset::new(2, LOCATION_2)];
    let collection = AssetCollection::new(assets, vec![Location::new(LOCATION_1, "Alpha")]);
    assert_eq!(collection.locations().len(), 1);
    assert!(collection.parent_location(2).is_none());
}

#[test]
fn walks_whole_branch() {
    let assets = vec![
        Asset::new(1, LOCATION_1),
        Asset::new(11, 1),
        Asset::new(111, 11),
        Asset::new(1111, 111),
        Asset::new(1112, 111),
    ];
    let collection = AssetCollection::new(assets, vec![Location::new(LOCATION_1, "Alpha")]);

    let branch = collection.asset(1).unwrap().all();
    assert_eq!(sorted_ids(&branch), vec![1, 11, 111, 1111, 1112]);
    assert_eq!(collection.asset(1).unwrap().size(), 2);
    assert_eq!(collection.asset(1111).unwrap().size(), 0);
    assert_eq!(collection.location(LOCATION_1).unwrap().size(), 2);
}

#[test]
fn counts_items_excluding_ship_content() {
    let assets = vec![
        Asset::new(1, LOCATION_1),
        Asset::new(11, 1),
        Asset::new(111, 11).with_quantity(3),
        Asset::new(1111, 111).with_flag(LocationFlag::HiSlot(0)),
        Asset::new(1112, 111).with_flag(LocationFlag::SpecializedFuelBay),
        Asset::new(1113, 111).with_flag(LocationFlag::DroneBay),
        Asset::new(1114, 111).with_flag(LocationFlag::FighterBay),
        Asset::new(1115, 111).with_flag(LocationFlag::Cargo),
        Asset::new(2, LOCATION_1),
    ];
    let collection = AssetCollection::new(assets, vec![Location::new(LOCATION_1, "Alpha")]);

    let location = collection.location(LOCATION_1).unwrap();
    assert_eq!(location.item_count_filtered(), 6);
    assert_eq!(location.item_count_any(), 11);
    assert_eq!(collection.asset(1).unwrap().item_count_filtered(), 5);
    assert_eq!(collection.item_count_filtered(), 6);
}

#[test]
fn unusual_slot_flags_still_count_as_ship_content() {
    let assets = vec![
        Asset::new(1, LOCATION_1),
        Asset::new(11, 1).with_flag(LocationFlag::from("HiSlot300")),
        Asset::new(12, 1).with_flag(LocationFlag::from("FighterTube07")),
        Asset::new(13, 1).with_flag(LocationFlag::from("Cargo")),
    ];
    let collection = AssetCollection::new(assets, vec![Location::new(LOCATION_1, "Alpha")]);

    assert_eq!(collection.item_count_filtered(), 1);
    assert_eq!(collection.location(LOCATION_1).unwrap().item_count_any(), 4);
    assert_eq!(
        collection.asset(11).unwrap().asset().location_flag.to_string(),
        "HiSlot300"
    );
}

#[test]
fn rebuild_gives_same_answers() {
    let first = two_station_collection();
    let second = two_station_collection();

    let mut first_ids = first.location_ids();
    let mut second_ids = second.location_ids();
    first_ids.sort_unstable();
    second_ids.sort_unstable();
    assert_eq!(first_ids, second_ids);

    for item_id in [1, 2, 11, 111, 1111, 3, 31, 4] {
        assert_eq!(
            first.parent_location_id(item_id),
            second.parent_location_id(item_id)
        );
    }
}

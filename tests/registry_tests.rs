/// Registry behaviour through the public API
///
/// Run with: cargo test --test registry_tests

use garagedb::{
    CollectionRegistry, GarageError, Keyed, SlottedCollection, Vehicle, VehicleColor,
    VehicleKind, VehicleQuery,
};

fn registry_with(capacities: &[usize]) -> CollectionRegistry<Vehicle> {
    let mut registry = CollectionRegistry::new();
    for &capacity in capacities {
        registry.create_collection(capacity).unwrap();
    }
    registry
}

#[test]
fn test_full_collection_rejects_add() {
    let mut registry = registry_with(&[1]);

    registry.add_item(Vehicle::car("ABC123", 4), 0).unwrap();
    let err = registry.add_item(Vehicle::car("DEF456", 4), 0).unwrap_err();

    assert_eq!(err, GarageError::CollectionFull { capacity: 1 });
    assert_eq!(registry.item_count(), 1);
}

#[test]
fn test_duplicate_key_in_same_collection() {
    let mut registry = registry_with(&[2]);

    registry.add_item(Vehicle::car("ABC123", 4), 0).unwrap();
    let other = Vehicle::bus("ABC123", 40).with_color(VehicleColor::Red);
    let err = registry.add_item(other, 0).unwrap_err();

    assert_eq!(err, GarageError::DuplicateKey("ABC123".into()));
    assert_eq!(registry.collection(0).unwrap().count(), 1);
}

#[test]
fn test_duplicate_reported_before_full() {
    let mut registry = registry_with(&[1, 1]);

    registry.add_item(Vehicle::car("ABC123", 4), 0).unwrap();
    registry.add_item(Vehicle::car("XYZ999", 4), 1).unwrap();

    let err = registry.add_item(Vehicle::car("abc123", 2), 1).unwrap_err();
    assert!(matches!(err, GarageError::DuplicateKey(_)));
}

#[test]
fn test_keys_unique_across_collections() {
    let mut registry = registry_with(&[3, 3]);

    registry.add_item(Vehicle::car("CAR123", 4), 0).unwrap();
    let err = registry.add_item(Vehicle::boat("car123", 8.0), 1).unwrap_err();

    assert!(matches!(err, GarageError::DuplicateKey(_)));
    assert!(registry.collection(1).unwrap().is_empty());
}

#[test]
fn test_freed_slot_is_reused() {
    let mut registry = registry_with(&[2]);

    registry.add_item(Vehicle::car("XXX001", 4), 0).unwrap();
    registry.add_item(Vehicle::car("YYY002", 4), 0).unwrap();
    assert!(registry.remove_item("XXX001"));
    registry.add_item(Vehicle::car("ZZZ003", 4), 0).unwrap();

    let garage = registry.collection(0).unwrap();
    assert_eq!(garage.slot(0).map(|v| v.key()), Some("ZZZ003"));
    let order: Vec<&str> = garage.iter().map(|v| v.key()).collect();
    assert_eq!(order, vec!["ZZZ003", "YYY002"]);
}

#[test]
fn test_find_is_case_insensitive() {
    let mut registry = registry_with(&[2, 2]);
    registry.add_item(Vehicle::car("CAR123", 4), 0).unwrap();

    let found = registry.find_item("car123").unwrap();
    assert_eq!(found.index, 0);
    assert_eq!(found.item.plate, "CAR123");
    assert_eq!(found.collection.count(), 1);

    assert_eq!(
        registry.find_item("BUS999").unwrap_err(),
        GarageError::NotFound("BUS999".into())
    );
}

#[test]
fn test_empty_query_returns_everything_in_order() {
    let mut registry = registry_with(&[2, 2]);
    registry.add_item(Vehicle::car("AAA111", 4), 1).unwrap();
    registry.add_item(Vehicle::bus("BBB222", 30), 0).unwrap();
    registry.add_item(Vehicle::boat("CCC333", 9.5), 1).unwrap();

    let all: Vec<&str> = registry
        .query_items(&VehicleQuery::new())
        .into_iter()
        .map(|v| v.key())
        .collect();
    assert_eq!(all, vec!["BBB222", "AAA111", "CCC333"]);
}

#[test]
fn test_query_combines_criteria() {
    let mut registry = registry_with(&[5]);
    registry
        .add_item(Vehicle::car("AAA111", 4).with_color(VehicleColor::Red), 0)
        .unwrap();
    registry
        .add_item(Vehicle::car("BBB222", 2).with_color(VehicleColor::Blue), 0)
        .unwrap();
    registry
        .add_item(Vehicle::bus("CCC333", 50).with_color(VehicleColor::Red), 0)
        .unwrap();

    let red_cars = registry.query_items(
        &VehicleQuery::new()
            .with_kind(VehicleKind::Car)
            .with_color(VehicleColor::Red),
    );
    assert_eq!(red_cars.len(), 1);
    assert_eq!(red_cars[0].plate, "AAA111");

    let six_wheels = registry.query_items(&VehicleQuery::new().with_wheels(6));
    assert_eq!(six_wheels.len(), 1);
    assert_eq!(six_wheels[0].plate, "CCC333");

    let by_closure = registry.query_items(&|v: &Vehicle| v.plate.starts_with('B'));
    assert_eq!(by_closure.len(), 1);
}

#[test]
fn test_count_by_kind_and_target_checks() {
    let mut registry = registry_with(&[3]);
    registry.add_item(Vehicle::car("AAA111", 4), 0).unwrap();
    registry.add_item(Vehicle::car("BBB222", 4), 0).unwrap();

    let counts = registry.count_by_kind([VehicleKind::Car, VehicleKind::Bus]);
    assert_eq!(counts.get(&VehicleKind::Car), Some(&2));
    assert_eq!(counts.get(&VehicleKind::Bus), Some(&0));
    assert_eq!(counts.len(), 2);

    assert_eq!(
        registry.add_item(Vehicle::car("CCC333", 4), 7).unwrap_err(),
        GarageError::GarageNotFound(7)
    );
    assert!(matches!(
        SlottedCollection::<Vehicle>::new(0),
        Err(GarageError::InvalidCapacity(0))
    ));
}

#[test]
fn test_listing_shows_every_garage() {
    let mut registry = registry_with(&[2, 1]);
    registry.add_item(Vehicle::car("AAA111", 4), 0).unwrap();

    let listing = registry.list_contents();
    assert!(listing.starts_with("Garages:"));
    assert!(listing.contains("Garage with capacity = 2, #stored = 1"));
    assert!(listing.contains("Garage with capacity = 1, #stored = 0"));
    assert!(listing.contains("plate=AAA111"));
}

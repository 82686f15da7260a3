use super::*;
use std::sync::{Arc, Mutex};

fn create_resolver() -> StaticResolver {
    StaticResolver::new(vec![
        Location::new("H7N 0C4", Coordinate::new(-73.75, 45.57)),
        Location::new("H7S 1Y9", Coordinate::new(-73.72, 45.56)),
        Location::new("H2X 1Y4", Coordinate::new(-73.57, 45.51)),
    ])
}

#[test]
fn can_exclude_unknown_and_duplicate_ids() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg| messages.lock().unwrap().push(msg.to_string()))
    };

    let set = create_location_set(["H7N 0C4", "XXX", "H2X 1Y4", "H7N 0C4"], &create_resolver(), &logger).unwrap();

    assert_eq!(set.all().map(|l| l.id.as_str()).collect::<Vec<_>>(), vec!["H7N 0C4", "H2X 1Y4"]);
    assert_eq!(set[1].coordinate, Coordinate::new(-73.57, 45.51));
    assert_eq!(messages.lock().unwrap().len(), 2);
}

#[test]
fn can_keep_first_location_of_repeated_id() {
    let resolver = StaticResolver::new(vec![
        Location::new("a", Coordinate::new(1., 1.)),
        Location::new("a", Coordinate::new(9., 9.)),
    ]);

    assert_eq!(resolver.resolve("a"), Some(Location::new("a", Coordinate::new(1., 1.))));
}

#[test]
fn can_fail_when_not_enough_locations_resolved() {
    let logger: InfoLogger = Arc::new(|_| {});

    let result = create_location_set(["H7N 0C4", "unknown"], &create_resolver(), &logger);

    assert_eq!(result.err(), Some(OptimizationError::InsufficientLocations { actual: 1 }));
}

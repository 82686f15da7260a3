#[cfg(test)]
#[path = "../../tests/unit/models/resolver_test.rs"]
mod resolver_test;

use crate::models::{Coordinate, Location, LocationSet};
use crate::utils::{InfoLogger, OptimizationError};
use rustc_hash::{FxHashMap, FxHashSet};

/// Resolves a free-form location identifier (e.g. postal code) into a location.
pub trait LocationResolver {
    /// Returns a location for given id or `None` when it is not known.
    fn resolve(&self, id: &str) -> Option<Location>;
}

/// A resolver which uses a preloaded gazetteer.
#[derive(Clone, Default)]
pub struct StaticResolver {
    coordinates: FxHashMap<String, Coordinate>,
}

impl StaticResolver {
    /// Creates a new instance of `StaticResolver`. When an id is repeated, its first location is kept.
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let mut coordinates = FxHashMap::default();
        locations.into_iter().for_each(|location| {
            coordinates.entry(location.id).or_insert(location.coordinate);
        });

        Self { coordinates }
    }
}

impl LocationResolver for StaticResolver {
    fn resolve(&self, id: &str) -> Option<Location> {
        self.coordinates.get(id).map(|&coordinate| Location::new(id, coordinate))
    }
}

/// Creates a location set from ids in given order. The first resolved id becomes the origin.
/// Unknown ids and repeated ids are excluded from the set, not treated as errors.
pub fn create_location_set<'a>(
    ids: impl IntoIterator<Item = &'a str>,
    resolver: &(dyn LocationResolver + Send + Sync),
    logger: &InfoLogger,
) -> Result<LocationSet, OptimizationError> {
    let mut known = FxHashSet::default();

    let locations = ids
        .into_iter()
        .filter(|id| {
            let is_new = known.insert(*id);
            if !is_new {
                (logger)(format!("location '{id}' is already added, skipping").as_str());
            }
            is_new
        })
        .filter_map(|id| {
            let location = resolver.resolve(id);
            if location.is_none() {
                (logger)(format!("location '{id}' is not found, skipping").as_str());
            }
            location
        })
        .collect::<Vec<_>>();

    LocationSet::new(locations)
}

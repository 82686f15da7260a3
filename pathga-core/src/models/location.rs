#[cfg(test)]
#[path = "../../tests/unit/models/location_test.rs"]
mod location_test;

use crate::utils::OptimizationError;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A location index inside of `LocationSet`.
pub type LocationIdx = usize;

/// Specifies a point on a plane. For geographic data, `x` is a longitude and `y` is a latitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Coordinate {
    /// A horizontal component (longitude).
    pub x: f64,
    /// A vertical component (latitude).
    pub y: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A visitable location identified by a stable key, e.g. postal code.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Location {
    /// A location id.
    pub id: String,
    /// A location coordinate.
    pub coordinate: Coordinate,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(id: &str, coordinate: Coordinate) -> Self {
        Self { id: id.to_string(), coordinate }
    }
}

/// An immutable ordered list of locations. A location at index 0 is the origin of every path.
#[derive(Clone, Debug)]
pub struct LocationSet {
    locations: Vec<Location>,
}

impl LocationSet {
    /// Creates a new instance of `LocationSet`. Fails when less than two locations are passed or
    /// location ids are not unique.
    pub fn new(locations: Vec<Location>) -> Result<Self, OptimizationError> {
        if locations.len() < 2 {
            return Err(OptimizationError::InsufficientLocations { actual: locations.len() });
        }

        let mut ids = FxHashSet::default();
        if let Some(duplicate) = locations.iter().find(|location| !ids.insert(location.id.as_str())) {
            return Err(OptimizationError::InvalidConfiguration(format!(
                "location id '{}' is used more than once",
                duplicate.id
            )));
        }

        Ok(Self { locations })
    }

    /// Returns the origin location.
    pub fn origin(&self) -> &Location {
        &self.locations[0]
    }

    /// Returns amount of locations.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    /// Returns location with given index.
    pub fn get(&self, index: LocationIdx) -> Option<&Location> {
        self.locations.get(index)
    }

    /// Returns an index of location with given id.
    pub fn position(&self, id: &str) -> Option<LocationIdx> {
        self.locations.iter().position(|location| location.id == id)
    }

    /// Returns all locations in their original order.
    pub fn all(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter()
    }
}

impl Index<LocationIdx> for LocationSet {
    type Output = Location;

    fn index(&self, index: LocationIdx) -> &Self::Output {
        &self.locations[index]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/costs/service_test.rs"]
mod service_test;

use super::Cost;
use crate::models::Location;
use crate::utils::{GenericError, GenericResult};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Provides travel cost (duration or distance) between two locations. This is the place where
/// an external routing service is plugged in.
pub trait TravelCostService {
    /// Returns travel cost from one location to another or an error when cost cannot be obtained.
    fn cost(&self, from: &Location, to: &Location) -> GenericResult<Cost>;
}

/// A single routing matrix entry.
#[derive(Clone, Debug, Deserialize)]
pub struct CostEntry {
    /// Origin location id.
    pub from: String,
    /// Destination location id.
    pub to: String,
    /// Travel cost.
    pub value: Cost,
}

/// A travel cost service backed by precomputed routing data keyed by location id pairs.
/// A pair without routing data is reported as a failure.
pub struct MatrixTravelCost {
    costs: FxHashMap<(String, String), Cost>,
}

impl MatrixTravelCost {
    /// Creates a new instance of `MatrixTravelCost`.
    pub fn new(entries: Vec<CostEntry>) -> GenericResult<Self> {
        if entries.is_empty() {
            return Err("no routing data found".into());
        }

        if let Some(entry) = entries.iter().find(|entry| !entry.value.is_finite() || entry.value < 0.) {
            return Err(format!("invalid cost '{}' from '{}' to '{}'", entry.value, entry.from, entry.to).into());
        }

        let costs = entries.into_iter().map(|entry| ((entry.from, entry.to), entry.value)).collect();

        Ok(Self { costs })
    }
}

impl TravelCostService for MatrixTravelCost {
    fn cost(&self, from: &Location, to: &Location) -> GenericResult<Cost> {
        if from.id == to.id {
            return Ok(0.);
        }

        self.costs
            .get(&(from.id.clone(), to.id.clone()))
            .copied()
            .ok_or_else(|| GenericError::from(format!("no route from '{}' to '{}'", from.id, to.id)))
    }
}

/// A travel cost service which uses straight line distance between coordinates.
#[derive(Default)]
pub struct EuclideanTravelCost {}

impl TravelCostService for EuclideanTravelCost {
    fn cost(&self, from: &Location, to: &Location) -> GenericResult<Cost> {
        let x = from.coordinate.x - to.coordinate.x;
        let y = from.coordinate.y - to.coordinate.y;

        Ok((x * x + y * y).sqrt())
    }
}

const EARTH_RADIUS_METERS: f64 = 6_371_000.;

/// A travel cost service which uses great circle distance between geographic coordinates.
/// Returns meters or, when speed (meters per second) is set, seconds.
#[derive(Default)]
pub struct HaversineTravelCost {
    speed: Option<f64>,
}

impl HaversineTravelCost {
    /// Creates a new instance of `HaversineTravelCost` which returns travel duration
    /// using given speed.
    pub fn new_with_speed(speed: f64) -> GenericResult<Self> {
        if !speed.is_finite() || speed <= 0. {
            return Err(format!("speed should be positive, got '{speed}'").into());
        }

        Ok(Self { speed: Some(speed) })
    }
}

impl TravelCostService for HaversineTravelCost {
    fn cost(&self, from: &Location, to: &Location) -> GenericResult<Cost> {
        let (lat1, lng1) = (from.coordinate.y.to_radians(), from.coordinate.x.to_radians());
        let (lat2, lng2) = (to.coordinate.y.to_radians(), to.coordinate.x.to_radians());

        let d_lat = (lat2 - lat1) / 2.;
        let d_lng = (lng2 - lng1) / 2.;
        let a = d_lat.sin().powi(2) + lat1.cos() * lat2.cos() * d_lng.sin().powi(2);
        let distance = 2. * EARTH_RADIUS_METERS * a.sqrt().min(1.).asin();

        Ok(self.speed.map_or(distance, |speed| distance / speed))
    }
}

//! This module reimports commonly used types.

pub use crate::costs::{
    Cost, CostCache, CostEntry, CostOracle, EuclideanTravelCost, HaversineTravelCost, MatrixTravelCost,
    TravelCostService,
};
pub use crate::evolution::{DuelSelector, Metrics, Selector, TelemetryMode, TruncationSelector};
pub use crate::models::{
    Coordinate, Fitness, Location, LocationResolver, LocationSet, Path, RankedPath, StaticResolver,
    create_location_set,
};
pub use crate::solver::{Builder, Solution, Solver, optimize};
pub use crate::utils::{
    CancellationQuota, DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, OptimizationError,
    Quota, Random,
};

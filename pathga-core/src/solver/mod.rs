//! The solver module contains the entry point of optimization: it wires travel costs, genetic
//! operators and the generation loop together.
//!
//! # Examples
//!
//! ```
//! # use std::sync::Arc;
//! use pathga_core::prelude::*;
//!
//! let locations = vec![
//!     Location::new("depot", Coordinate::new(0., 0.)),
//!     Location::new("a", Coordinate::new(1., 2.)),
//!     Location::new("b", Coordinate::new(3., 1.)),
//!     Location::new("c", Coordinate::new(4., 4.)),
//! ];
//! let environment = Arc::new(Environment::new_with_seed(42));
//!
//! let solution = Builder::new(locations, Arc::new(EuclideanTravelCost::default()), environment)
//!     .with_max_generations(Some(50))
//!     .with_population_size(20)
//!     .build()?
//!     .solve()?;
//!
//! let best = solution.paths.first().expect("no paths");
//! assert_eq!(best.path[0], 0);
//! # Ok::<(), OptimizationError>(())
//! ```

mod builder;
pub use self::builder::Builder;

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::costs::{CostCache, CostOracle, TravelCostService};
use crate::evolution::*;
use crate::models::{Location, LocationSet, Path, RankedPath};
use crate::utils::{Environment, OptimizationError};
use std::sync::Arc;

/// A result of optimization run.
pub struct Solution {
    /// All paths of the final population ranked by fitness, best first.
    pub paths: Vec<RankedPath>,
    /// Run metrics.
    pub metrics: Metrics,
}

/// A genetic solver for the shortest open path which starts at the first location.
pub struct Solver {
    locations: Arc<LocationSet>,
    service: Arc<dyn TravelCostService + Send + Sync>,
    cache: Arc<CostCache>,
    is_symmetric: bool,
    config: EvolutionConfig,
    environment: Arc<Environment>,
}

impl Solver {
    /// Returns locations used by solver.
    pub fn locations(&self) -> &LocationSet {
        self.locations.as_ref()
    }

    /// Runs optimization.
    pub fn solve(self) -> Result<Solution, OptimizationError> {
        let oracle = Arc::new(CostOracle::new(self.service, self.cache).with_symmetry(self.is_symmetric));
        let evaluator = FitnessEvaluator::new(self.locations.clone(), oracle.clone(), self.environment.parallelism);

        // NOTE with two locations there is only one path
        if self.locations.size() == 2 {
            let path = Path::new_unchecked(vec![0, 1]);
            let fitness = evaluator.fitness(&path)?;

            let metrics = Metrics { oracle: oracle.statistics(), ..Metrics::default() };

            return Ok(Solution { paths: vec![RankedPath { path, fitness }], metrics });
        }

        let driver = GenerationDriver::new(evaluator, self.locations.size(), self.config, self.environment)?;
        let (paths, metrics) = driver.run()?;

        Ok(Solution { paths, metrics })
    }
}

/// Finds a short open path over given locations, starting at the first one. Returns the final
/// population ranked by fitness, best first.
pub fn optimize(
    locations: Vec<Location>,
    generations: usize,
    population_size: usize,
    service: Arc<dyn TravelCostService + Send + Sync>,
    environment: Arc<Environment>,
) -> Result<Vec<RankedPath>, OptimizationError> {
    Builder::new(locations, service, environment)
        .with_max_generations(Some(generations))
        .with_population_size(population_size)
        .with_telemetry(TelemetryMode::None)
        .build()?
        .solve()
        .map(|solution| solution.paths)
}

#[cfg(test)]
#[path = "../../tests/unit/evolution/fitness_test.rs"]
mod fitness_test;

use crate::costs::CostOracle;
use crate::models::{Fitness, LocationSet, Path};
use crate::utils::{OptimizationError, ThreadPool, parallel_try_collect};
use std::sync::Arc;

/// Scores paths by cumulative travel cost between consecutive positions.
pub struct FitnessEvaluator {
    locations: Arc<LocationSet>,
    oracle: Arc<CostOracle>,
    thread_pool: ThreadPool,
}

impl FitnessEvaluator {
    /// Creates a new instance of `FitnessEvaluator`.
    pub fn new(locations: Arc<LocationSet>, oracle: Arc<CostOracle>, parallelism: usize) -> Self {
        Self { locations, oracle, thread_pool: ThreadPool::new(parallelism) }
    }

    /// Returns fitness of the path: a sum of costs between consecutive locations. There is no
    /// return leg to the origin.
    pub fn fitness(&self, path: &Path) -> Result<Fitness, OptimizationError> {
        path.windows(2).try_fold(0. as Fitness, |total, leg| {
            self.oracle.cost(&self.locations[leg[0]], &self.locations[leg[1]]).map(|cost| total + cost)
        })
    }

    /// Returns fitness of each path, evaluated in parallel. Evaluation stops at the first failure:
    /// the oracle keeps it, so every failed path reports the same error.
    pub fn fitness_many(&self, population: &[Path]) -> Result<Vec<Fitness>, OptimizationError> {
        self.thread_pool.execute(|| parallel_try_collect(population, |path| self.fitness(path)))
    }

    /// Returns used cost oracle.
    pub fn oracle(&self) -> &CostOracle {
        self.oracle.as_ref()
    }
}

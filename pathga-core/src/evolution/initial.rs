#[cfg(test)]
#[path = "../../tests/unit/evolution/initial_test.rs"]
mod initial_test;

use crate::models::{Path, Population};
use crate::utils::{OptimizationError, Random};
use rand::prelude::SliceRandom;
use std::iter::once;

/// Creates initial population of random paths. Paths are not guaranteed to be unique.
pub fn create_initial_population(
    size: usize,
    population_size: usize,
    random: &(dyn Random + Send + Sync),
) -> Result<Population, OptimizationError> {
    if size < 2 {
        return Err(OptimizationError::InsufficientLocations { actual: size });
    }

    Ok((0..population_size).map(|_| create_random_path(size, random)).collect())
}

/// Creates a path which starts at the origin and visits the rest of locations in random order.
pub fn create_random_path(size: usize, random: &(dyn Random + Send + Sync)) -> Path {
    let mut tail = (1..size).collect::<Vec<_>>();
    tail.shuffle(&mut random.get_rng());

    Path::new_unchecked(once(0).chain(tail).collect())
}

#[cfg(test)]
#[path = "../../tests/unit/evolution/selection_test.rs"]
mod selection_test;

use crate::models::{Fitness, Population};
use crate::utils::{Random, compare_floats};
use rand::prelude::SliceRandom;

/// Chooses paths which survive to become parents of the next generation.
pub trait Selector {
    /// Returns half of the population. `fitness` holds a score for each path of the population
    /// at the same position.
    fn select(&self, population: Population, fitness: &[Fitness], random: &(dyn Random + Send + Sync)) -> Population;
}

/// A randomized duel: population is shuffled, a path at `i` meets a path at `i + midpoint` and
/// the one with lower fitness survives. On a tie, the first one of the pair survives. With odd
/// population size, the unpaired path is dropped.
#[derive(Default)]
pub struct DuelSelector {}

impl Selector for DuelSelector {
    fn select(&self, population: Population, fitness: &[Fitness], random: &(dyn Random + Send + Sync)) -> Population {
        assert_eq!(population.len(), fitness.len());

        let mut order = (0..population.len()).collect::<Vec<_>>();
        order.shuffle(&mut random.get_rng());

        let midpoint = order.len() / 2;
        let winners = (0..midpoint)
            .map(|i| {
                let (first, second) = (order[i], order[i + midpoint]);
                if fitness[second] < fitness[first] { second } else { first }
            })
            .collect::<Vec<_>>();

        take_by_indices(population, winners)
    }
}

/// Keeps the best half of the population.
#[derive(Default)]
pub struct TruncationSelector {}

impl Selector for TruncationSelector {
    fn select(&self, population: Population, fitness: &[Fitness], _: &(dyn Random + Send + Sync)) -> Population {
        assert_eq!(population.len(), fitness.len());

        let mut order = (0..population.len()).collect::<Vec<_>>();
        order.sort_by(|&a, &b| compare_floats(fitness[a], fitness[b]));
        order.truncate(population.len() / 2);

        take_by_indices(population, order)
    }
}

fn take_by_indices(population: Population, indices: Vec<usize>) -> Population {
    let mut population = population.into_iter().map(Some).collect::<Vec<_>>();

    indices.into_iter().filter_map(|idx| population[idx].take()).collect()
}

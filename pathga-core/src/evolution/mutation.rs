#[cfg(test)]
#[path = "../../tests/unit/evolution/mutation_test.rs"]
mod mutation_test;

use crate::models::Path;
use crate::utils::Random;

/// A default probability of swap mutation.
pub const DEFAULT_MUTATION_PROBABILITY: f64 = 0.009;

/// With given probability, swaps two random positions of the path. The origin is never moved.
/// Returns true if mutation was applied.
pub fn mutate(path: &mut Path, probability: f64, random: &(dyn Random + Send + Sync)) -> bool {
    if path.len() < 2 || !random.is_hit(probability) {
        return false;
    }

    let last = path.len() as i32 - 1;
    let first = random.uniform_int(1, last) as usize;
    let second = random.uniform_int(1, last) as usize;

    path.swap(first, second);

    true
}

/// Applies mutation to every path independently. Returns amount of mutated paths.
pub fn mutate_population(population: &mut [Path], probability: f64, random: &(dyn Random + Send + Sync)) -> usize {
    population.iter_mut().map(|path| mutate(path, probability, random)).filter(|&is_mutated| is_mutated).count()
}

#[cfg(test)]
#[path = "../../tests/unit/evolution/crossover_test.rs"]
mod crossover_test;

use crate::models::{Path, Population};
use crate::utils::Random;

/// Amount of offspring produced by one pair of parents per round: `ab`, `ba`, `ab`, `ba`.
pub const OFFSPRING_PER_PAIR: usize = 4;

/// Produces an offspring using order-preserving crossover with random cut points.
pub fn recombine(parent_a: &Path, parent_b: &Path, random: &(dyn Random + Send + Sync)) -> Path {
    let size = parent_a.len() as i32;
    let start = random.uniform_int(0, size - 1);
    let finish = random.uniform_int(start, size);

    recombine_with_cuts(parent_a, parent_b, start as usize, finish as usize)
}

/// Produces an offspring which keeps `parent_a[start..finish]` at its positions and fills the rest,
/// left to right, with locations of `parent_b` in their order, skipping already placed ones.
pub fn recombine_with_cuts(parent_a: &Path, parent_b: &Path, start: usize, finish: usize) -> Path {
    assert_eq!(parent_a.len(), parent_b.len());
    assert!(start <= finish && finish <= parent_a.len());

    let size = parent_a.len();
    let mut is_placed = vec![false; size];
    parent_a[start..finish].iter().for_each(|&idx| is_placed[idx] = true);

    let mut remaining = parent_b.iter().copied().filter(|&idx| !is_placed[idx]);

    let indices = (0..size)
        .map(|position| {
            if (start..finish).contains(&position) {
                parent_a[position]
            } else {
                remaining.next().unwrap_or_else(|| panic!("DegenerateOffspring: parents have different locations"))
            }
        })
        .collect::<Vec<_>>();

    let offspring = Path::new_unchecked(indices);
    assert!(offspring.is_valid(), "DegenerateOffspring: {:?} from {:?} and {:?}", offspring, parent_a, parent_b);

    offspring
}

/// Creates exactly `population_size` offspring from survivors. Survivors are split at their
/// midpoint and `i`-th path of the first half is paired with `i`-th path of the second half
/// (a leftover path of odd-sized survivors is paired with the first one). Pairs are used in
/// rounds until the requested size is reached.
pub fn create_offspring(
    survivors: &[Path],
    population_size: usize,
    random: &(dyn Random + Send + Sync),
) -> Population {
    if survivors.is_empty() {
        return Population::default();
    }

    let midpoint = survivors.len() / 2;
    let mut pairs = (0..midpoint).map(|idx| (idx, idx + midpoint)).collect::<Vec<_>>();
    if survivors.len() % 2 == 1 {
        pairs.push((survivors.len() - 1, 0));
    }

    pairs
        .iter()
        .cycle()
        .flat_map(|&(a, b)| (0..OFFSPRING_PER_PAIR).map(move |round| if round % 2 == 0 { (a, b) } else { (b, a) }))
        .take(population_size)
        .map(|(a, b)| recombine(&survivors[a], &survivors[b], random))
        .collect()
}

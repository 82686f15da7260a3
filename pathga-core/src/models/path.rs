#[cfg(test)]
#[path = "../../tests/unit/models/path_test.rs"]
mod path_test;

use crate::models::LocationIdx;
use std::ops::Deref;

/// A fitness value of a path: cumulative travel cost, lower is better.
pub type Fitness = f64;

/// A candidate visiting order: a permutation of location indices which starts at the origin.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    indices: Vec<LocationIdx>,
}

/// A collection of candidate paths of the same length.
pub type Population = Vec<Path>;

impl Path {
    /// Creates a path from given indices without validation.
    pub fn new_unchecked(indices: Vec<LocationIdx>) -> Self {
        Self { indices }
    }

    /// Creates a path from given indices, returns `None` if indices do not form a valid path.
    pub fn new(indices: Vec<LocationIdx>) -> Option<Self> {
        let path = Self { indices };
        path.is_valid().then_some(path)
    }

    /// Returns true if path is a permutation of `[0..len)` with the origin at the first position.
    pub fn is_valid(&self) -> bool {
        if self.indices.first() != Some(&0) {
            return false;
        }

        let mut seen = vec![false; self.indices.len()];
        self.indices.iter().all(|&idx| idx < seen.len() && !std::mem::replace(&mut seen[idx], true))
    }

    /// Swaps two positions of the path. The origin position is not allowed to move.
    pub fn swap(&mut self, first: usize, second: usize) {
        assert!(first > 0 && second > 0, "origin cannot be moved");
        self.indices.swap(first, second);
    }

    /// Returns path indices.
    pub fn indices(&self) -> &[LocationIdx] {
        self.indices.as_slice()
    }
}

impl Deref for Path {
    type Target = [LocationIdx];

    fn deref(&self) -> &Self::Target {
        self.indices.as_slice()
    }
}

/// A path together with its fitness, a unit of optimization result.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedPath {
    /// A path.
    pub path: Path,
    /// Path fitness.
    pub fitness: Fitness,
}

//! Termination criteria: when evolution should stop and the population is considered converged.

#[cfg(test)]
#[path = "../../tests/unit/evolution/termination_test.rs"]
mod termination_test;

use crate::models::Fitness;
use crate::utils::{Timer, get_cv};

/// A default amount of generations.
pub const DEFAULT_MAX_GENERATIONS: usize = 1000;

/// Keeps progress of an evolution run.
pub struct EvolutionState {
    /// Amount of completed generations.
    pub generation: usize,
    /// A timer started when evolution has started.
    pub timer: Timer,
    /// A best fitness observed in each completed generation.
    pub best_fitness: Vec<Fitness>,
}

impl Default for EvolutionState {
    fn default() -> Self {
        Self { generation: 0, timer: Timer::start(), best_fitness: Vec::default() }
    }
}

/// A trait which specifies criteria when evolution should stop.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, state: &EvolutionState) -> bool;
}

/// A termination criteria which is in terminated state when maximum amount of generations is reached.
pub struct MaxGeneration {
    limit: usize,
}

impl MaxGeneration {
    /// Creates a new instance of `MaxGeneration`.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }
}

impl Termination for MaxGeneration {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        state.generation >= self.limit
    }
}

/// A termination criteria which is in terminated state when max time elapsed.
pub struct MaxTime {
    limit_in_secs: f64,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        state.timer.elapsed_secs_as_f64() > self.limit_in_secs
    }
}

/// A termination criteria which calculates coefficient of variation of the best fitness over
/// last `sample` generations and terminates when it drops below threshold.
pub struct MinVariation {
    sample: usize,
    threshold: f64,
}

impl MinVariation {
    /// Creates a new instance of `MinVariation`.
    pub fn new(sample: usize, threshold: f64) -> Self {
        assert_ne!(sample, 0);
        Self { sample, threshold }
    }
}

impl Termination for MinVariation {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        if state.best_fitness.len() < self.sample {
            return false;
        }

        let values = &state.best_fitness[state.best_fitness.len() - self.sample..];

        get_cv(values) < self.threshold
    }
}

/// Encapsulates multiple termination criteria: terminates when any of them is met.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination + Send + Sync>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination + Send + Sync>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, state: &EvolutionState) -> bool {
        self.terminations.iter().any(|t| t.is_termination(state))
    }
}

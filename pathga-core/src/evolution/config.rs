use crate::evolution::*;
use std::sync::Arc;

/// A default population size. It is kept constant across generations.
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// An evolution configuration.
#[derive(Clone)]
pub struct EvolutionConfig {
    /// Amount of paths in each generation, at least two.
    pub population_size: usize,
    /// A probability of swap mutation applied to each offspring.
    pub mutation_probability: f64,
    /// Chooses survivors of each generation.
    pub selector: Arc<dyn Selector + Send + Sync>,
    /// Defines when evolution stops.
    pub termination: Arc<dyn Termination + Send + Sync>,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            mutation_probability: DEFAULT_MUTATION_PROBABILITY,
            selector: Arc::new(DuelSelector::default()),
            termination: Arc::new(MaxGeneration::new(DEFAULT_MAX_GENERATIONS)),
            telemetry: TelemetryMode::None,
        }
    }
}

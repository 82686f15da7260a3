#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use crate::costs::{CostCache, TravelCostService};
use crate::evolution::*;
use crate::models::{Location, LocationSet};
use crate::solver::Solver;
use crate::utils::{Environment, OptimizationError};
use std::sync::Arc;

/// Provides configurable way to build solver.
pub struct Builder {
    locations: Vec<Location>,
    service: Arc<dyn TravelCostService + Send + Sync>,
    environment: Arc<Environment>,
    cache: Option<Arc<CostCache>>,
    is_symmetric: bool,
    max_generations: Option<usize>,
    max_time: Option<f64>,
    min_variation: Option<(usize, f64)>,
    telemetry: Option<TelemetryMode>,
    config: EvolutionConfig,
}

impl Builder {
    /// Creates a new instance of `Builder`. The first location is the origin of every path.
    pub fn new(
        locations: Vec<Location>,
        service: Arc<dyn TravelCostService + Send + Sync>,
        environment: Arc<Environment>,
    ) -> Self {
        Self {
            locations,
            service,
            environment,
            cache: None,
            is_symmetric: false,
            max_generations: None,
            max_time: None,
            min_variation: None,
            telemetry: None,
            config: EvolutionConfig::default(),
        }
    }

    /// Sets max generations to be run.
    /// Default is 1000.
    pub fn with_max_generations(mut self, limit: Option<usize>) -> Self {
        self.max_generations = limit;
        self
    }

    /// Sets max running time limit in seconds. Reaching it stops evolution normally.
    /// Default is None.
    pub fn with_max_time(mut self, limit: Option<f64>) -> Self {
        self.max_time = limit;
        self
    }

    /// Sets early stop on low variation of best fitness over given amount of generations.
    /// Default is None.
    pub fn with_min_variation(mut self, variation: Option<(usize, f64)>) -> Self {
        self.min_variation = variation;
        self
    }

    /// Sets population size.
    /// Default is 100.
    pub fn with_population_size(mut self, size: usize) -> Self {
        (self.environment.logger)(format!("configured to use population size={size}").as_str());
        self.config.population_size = size;
        self
    }

    /// Sets mutation probability.
    /// Default is 0.009.
    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        (self.environment.logger)(format!("configured to use mutation probability={probability}").as_str());
        self.config.mutation_probability = probability;
        self
    }

    /// Sets selection algorithm.
    /// Default is duel selection.
    pub fn with_selector(mut self, selector: Arc<dyn Selector + Send + Sync>) -> Self {
        self.config.selector = selector;
        self
    }

    /// Sets a cost cache which can be shared between runs. It should be backed by the same
    /// travel cost service in all of them.
    /// Default is a new cache for each run.
    pub fn with_cost_cache(mut self, cache: Arc<CostCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Marks travel costs as symmetric, so that a reversed pair is answered from cache.
    /// Default is false.
    pub fn with_symmetric_costs(mut self, is_symmetric: bool) -> Self {
        self.is_symmetric = is_symmetric;
        self
    }

    /// Sets telemetry mode.
    /// Default is logging each 100th generation via environment logger and tracking best path
    /// of each 100th generation.
    pub fn with_telemetry(mut self, mode: TelemetryMode) -> Self {
        self.telemetry = Some(mode);
        self
    }

    /// Builds solver with parameters specified.
    pub fn build(self) -> Result<Solver, OptimizationError> {
        let locations = Arc::new(LocationSet::new(self.locations)?);
        let logger = self.environment.logger.clone();
        let mut config = self.config;

        let max_generations = self.max_generations.unwrap_or_else(|| {
            (logger)(format!("configured to use default max-generations ({DEFAULT_MAX_GENERATIONS})").as_str());
            DEFAULT_MAX_GENERATIONS
        });

        let mut criterias: Vec<Box<dyn Termination + Send + Sync>> =
            vec![Box::new(MaxGeneration::new(max_generations))];

        if let Some(limit) = self.max_time {
            (logger)(format!("configured to use max-time {limit}s").as_str());
            criterias.push(Box::new(MaxTime::new(limit)));
        }

        if let Some((sample, threshold)) = self.min_variation {
            if sample == 0 {
                return Err(OptimizationError::InvalidConfiguration("variation sample should be positive".to_string()));
            }

            (logger)(format!("configured to use min variation with sample: {sample}, threshold: {threshold}").as_str());
            criterias.push(Box::new(MinVariation::new(sample, threshold)));
        }

        config.termination = Arc::new(CompositeTermination::new(criterias));
        config.telemetry =
            self.telemetry.unwrap_or(TelemetryMode::All { logger: logger.clone(), log_best: 100, track_best: 100 });

        Ok(Solver {
            locations,
            service: self.service,
            cache: self.cache.unwrap_or_default(),
            is_symmetric: self.is_symmetric,
            config,
            environment: self.environment,
        })
    }
}

//! A module which provides the logic to collect metrics about evolution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::costs::OracleStatistics;
use crate::evolution::EvolutionState;
use crate::models::{Fitness, Path};
use crate::utils::{InfoLogger, Timer};

/// Encapsulates different measurements regarding evolution run.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    /// Run duration in milliseconds.
    pub duration: u128,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: f64,
    /// Travel cost lookups.
    pub oracle: OracleStatistics,
    /// Evolution progress: best path at tracked generations.
    pub evolution: Vec<Generation>,
}

/// Represents information about generation.
#[derive(Clone, Debug)]
pub struct Generation {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started in seconds.
    pub timestamp: f64,
    /// Best fitness in generation.
    pub fitness: Fitness,
    /// Best path in generation.
    pub path: Path,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best path is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often best path is tracked.
        track_best: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best path is logged.
        log_best: usize,
        /// Specifies how often best path is tracked.
        track_best: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: Metrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { time: Timer::start(), metrics: Metrics::default(), mode }
    }

    /// Reports start of evolution.
    pub fn on_initial(&mut self, locations: usize, population_size: usize) {
        self.time = Timer::start();
        self.log(
            format!("[0s] created initial population of {population_size} paths over {locations} locations").as_str(),
        );
    }

    /// Reports generation statistics.
    pub fn on_generation(&mut self, state: &EvolutionState, best: (&Path, Fitness), generation_time: Timer) {
        let generation = state.generation;
        self.metrics.generations = generation;

        let (log_best, track_best) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (*log_best, usize::MAX),
            TelemetryMode::OnlyMetrics { track_best } => (usize::MAX, *track_best),
            TelemetryMode::All { log_best, track_best, .. } => (*log_best, *track_best),
        };

        let (path, fitness) = best;

        if generation % log_best.max(1) == 0 {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, best fitness: {:.3}",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis(),
                    fitness
                )
                .as_str(),
            );
        }

        if generation % track_best.max(1) == 0 {
            self.metrics.evolution.push(Generation {
                number: generation,
                timestamp: self.time.elapsed_secs_as_f64(),
                fitness,
                path: path.clone(),
            });
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, state: &EvolutionState, oracle: OracleStatistics) {
        let elapsed = self.time.elapsed_secs_as_f64();
        let speed = if elapsed > 0. { state.generation as f64 / elapsed } else { 0. };

        self.metrics.duration = self.time.elapsed_millis();
        self.metrics.generations = state.generation;
        self.metrics.speed = speed;
        self.metrics.oracle = oracle;

        self.log(
            format!(
                "[{}s] total generations: {}, speed: {:.2} gen/sec, travel cost requests: {}, cache hits: {}",
                self.time.elapsed_secs(),
                state.generation,
                speed,
                oracle.service_calls,
                oracle.cache_hits
            )
            .as_str(),
        );
    }

    /// Gets metrics.
    pub fn get_metrics(self) -> Metrics {
        self.metrics
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}

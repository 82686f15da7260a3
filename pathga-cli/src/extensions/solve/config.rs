//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use pathga_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies evolution configuration.
    pub evolution: Option<EvolutionConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies how travel costs are obtained.
    pub routing: Option<RoutingConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// An evolution configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    /// Amount of paths in each generation. Default is 100.
    pub population_size: Option<usize>,
    /// A probability of swap mutation. Default is 0.009.
    pub mutation_probability: Option<f64>,
    /// A selection algorithm. Default is duel.
    pub selection: Option<SelectionType>,
}

/// Specifies selection algorithm.
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(tag = "type")]
pub enum SelectionType {
    /// Shuffled paths are paired, the fitter one of each pair survives.
    #[serde(rename(deserialize = "duel"))]
    Duel,
    /// The best half survives.
    #[serde(rename(deserialize = "truncation"))]
    Truncation,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max running time in seconds.
    pub max_time: Option<f64>,
    /// Max amount of generations.
    pub max_generations: Option<usize>,
    /// Stops on low variation of best fitness.
    pub variation: Option<VariationConfig>,
}

/// A variation of best fitness termination configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct VariationConfig {
    /// Amount of last generations to analyze.
    pub sample: usize,
    /// Coefficient of variation threshold.
    pub cv: f64,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    logging: Option<LoggingConfig>,
    metrics: Option<MetricsConfig>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    enabled: bool,
    /// Specifies how often best path is logged. Default is 100 (generations).
    log_best: Option<usize>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct MetricsConfig {
    /// Specifies whether metrics collection is enabled. Default is false.
    enabled: bool,
    /// Specifies how often best path is tracked. Default is 100 (generations).
    track_best: Option<usize>,
}

/// A routing configuration. It is used when no routing matrix is provided.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct RoutingConfig {
    /// A metric used to compute travel cost from coordinates. Default is euclidean.
    pub metric: Option<MetricType>,
    /// A speed in meters per second, only for haversine metric. When set, travel cost is duration.
    pub speed: Option<f64>,
    /// Specifies whether cost from `a` to `b` is the same as from `b` to `a`. Default is false.
    pub symmetric: Option<bool>,
}

/// Specifies a metric used to compute travel cost from coordinates.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
pub enum MetricType {
    /// A straight line distance.
    #[serde(rename(deserialize = "euclidean"))]
    Euclidean,
    /// A great circle distance in meters, coordinates are longitude and latitude.
    #[serde(rename(deserialize = "haversine"))]
    Haversine,
}

impl TryFrom<&str> for MetricType {
    type Error = GenericError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "euclidean" => Ok(Self::Euclidean),
            "haversine" => Ok(Self::Haversine),
            _ => Err(format!("unknown metric: '{value}'").into()),
        }
    }
}

/// An environment configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct EnvironmentConfig {
    /// A random seed.
    pub seed: Option<u64>,
    /// Amount of threads used to evaluate fitness. Default is amount of cpus.
    pub parallelism: Option<usize>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a travel cost service: from routing matrix when it is present, otherwise from metric.
pub fn create_travel_cost_service(
    routing: Option<&RoutingConfig>,
    matrix: Option<Vec<CostEntry>>,
) -> Result<Arc<dyn TravelCostService + Send + Sync>, GenericError> {
    if let Some(entries) = matrix {
        return Ok(Arc::new(MatrixTravelCost::new(entries)?));
    }

    let (metric, speed) = routing.map_or((None, None), |routing| (routing.metric, routing.speed));

    let service: Arc<dyn TravelCostService + Send + Sync> = match (metric.unwrap_or(MetricType::Euclidean), speed) {
        (MetricType::Euclidean, None) => Arc::new(EuclideanTravelCost::default()),
        (MetricType::Euclidean, Some(_)) => return Err("speed is supported only by haversine metric".into()),
        (MetricType::Haversine, None) => Arc::new(HaversineTravelCost::default()),
        (MetricType::Haversine, Some(speed)) => Arc::new(HaversineTravelCost::new_with_speed(speed)?),
    };

    Ok(service)
}

/// Creates a solver `Builder` from config.
pub fn create_builder_from_config(
    locations: Vec<Location>,
    service: Arc<dyn TravelCostService + Send + Sync>,
    environment: Arc<Environment>,
    config: &Config,
) -> Builder {
    let mut builder = Builder::new(locations, service, environment.clone());

    builder = configure_from_telemetry(builder, &config.telemetry, environment.logger.clone());
    builder = configure_from_evolution(builder, &config.evolution);
    builder = configure_from_termination(builder, &config.termination);

    if let Some(is_symmetric) = config.routing.as_ref().and_then(|routing| routing.symmetric) {
        builder = builder.with_symmetric_costs(is_symmetric);
    }

    builder
}

fn configure_from_evolution(mut builder: Builder, evolution_config: &Option<EvolutionConfig>) -> Builder {
    if let Some(config) = evolution_config {
        if let Some(population_size) = config.population_size {
            builder = builder.with_population_size(population_size);
        }

        if let Some(probability) = config.mutation_probability {
            builder = builder.with_mutation_probability(probability);
        }

        builder = match config.selection {
            Some(SelectionType::Truncation) => builder.with_selector(Arc::new(TruncationSelector::default())),
            Some(SelectionType::Duel) | None => builder,
        };
    }

    builder
}

fn configure_from_termination(mut builder: Builder, termination_config: &Option<TerminationConfig>) -> Builder {
    if let Some(config) = termination_config {
        builder = builder.with_max_time(config.max_time);
        builder = builder.with_max_generations(config.max_generations);
        builder = builder.with_min_variation(config.variation.as_ref().map(|v| (v.sample, v.cv)));
    }

    builder
}

fn configure_from_telemetry(
    builder: Builder,
    telemetry_config: &Option<TelemetryConfig>,
    logger: InfoLogger,
) -> Builder {
    const LOG_BEST: usize = 100;
    const TRACK_BEST: usize = 100;

    let Some(config) = telemetry_config else {
        return builder;
    };

    let log_best = config.logging.as_ref().filter(|logging| logging.enabled).map(|l| l.log_best.unwrap_or(LOG_BEST));
    let track_best =
        config.metrics.as_ref().filter(|metrics| metrics.enabled).map(|m| m.track_best.unwrap_or(TRACK_BEST));

    let telemetry_mode = match (log_best, track_best) {
        (Some(log_best), Some(track_best)) => TelemetryMode::All { logger, log_best, track_best },
        (Some(log_best), None) => TelemetryMode::OnlyLogging { logger, log_best },
        (None, Some(track_best)) => TelemetryMode::OnlyMetrics { track_best },
        (None, None) => TelemetryMode::None,
    };

    builder.with_telemetry(telemetry_mode)
}

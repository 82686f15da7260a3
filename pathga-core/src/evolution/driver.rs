#[cfg(test)]
#[path = "../../tests/unit/evolution/driver_test.rs"]
mod driver_test;

use crate::evolution::*;
use crate::models::{Fitness, Path, Population, RankedPath};
use crate::utils::{Environment, OptimizationError, Timer, compare_floats, compare_floats_refs};
use std::sync::Arc;

/// Specifies a state of evolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Initial population is created, no generation is run yet.
    Initialized,
    /// Evolution is in progress, the value is amount of completed generations.
    Evolving(usize),
    /// Termination criteria is met, final population is ready to be ranked.
    Converged,
}

/// Runs evolution: each generation evaluates fitness, selects survivors, recombines them into
/// the new population and mutates offspring.
pub struct GenerationDriver {
    evaluator: FitnessEvaluator,
    config: EvolutionConfig,
    environment: Arc<Environment>,
    telemetry: Telemetry,
    population: Population,
    evolution_state: EvolutionState,
    state: DriverState,
}

impl GenerationDriver {
    /// Creates a new instance of `GenerationDriver` with random initial population.
    pub fn new(
        evaluator: FitnessEvaluator,
        size: usize,
        config: EvolutionConfig,
        environment: Arc<Environment>,
    ) -> Result<Self, OptimizationError> {
        if config.population_size < 2 {
            return Err(OptimizationError::InvalidConfiguration(format!(
                "population size should be at least 2, got {}",
                config.population_size
            )));
        }

        if !(0. ..=1.).contains(&config.mutation_probability) {
            return Err(OptimizationError::InvalidConfiguration(format!(
                "mutation probability should be in [0, 1] range, got {}",
                config.mutation_probability
            )));
        }

        let population = create_initial_population(size, config.population_size, environment.random.as_ref())?;

        let mut telemetry = Telemetry::new(config.telemetry.clone());
        telemetry.on_initial(size, config.population_size);

        Ok(Self {
            evaluator,
            config,
            environment,
            telemetry,
            population,
            evolution_state: EvolutionState::default(),
            state: DriverState::Initialized,
        })
    }

    /// Returns current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Returns current population.
    pub fn population(&self) -> &[Path] {
        self.population.as_slice()
    }

    /// Makes one transition: either runs one more generation or moves to converged state.
    /// Fails when quota is reached or travel cost cannot be obtained.
    pub fn step(&mut self) -> Result<DriverState, OptimizationError> {
        let generation = match self.state {
            DriverState::Converged => return Ok(self.state),
            DriverState::Initialized => 0,
            DriverState::Evolving(generation) => generation,
        };

        if self.config.termination.is_termination(&self.evolution_state) {
            self.state = DriverState::Converged;
            return Ok(self.state);
        }

        if self.environment.is_quota_reached() {
            return Err(OptimizationError::Interrupted { generation });
        }

        self.run_generation().map_err(|err| err.at_generation(generation))?;
        self.state = DriverState::Evolving(self.evolution_state.generation);

        Ok(self.state)
    }

    /// Runs evolution till convergence and returns the final population ranked by fitness,
    /// best path first.
    pub fn run(mut self) -> Result<(Vec<RankedPath>, Metrics), OptimizationError> {
        while self.step()? != DriverState::Converged {}

        let generation = self.evolution_state.generation;
        let fitness = self.evaluator.fitness_many(&self.population).map_err(|err| err.at_generation(generation))?;

        let mut ranked = self
            .population
            .into_iter()
            .zip(fitness)
            .map(|(path, fitness)| RankedPath { path, fitness })
            .collect::<Vec<_>>();
        ranked.sort_by(|a, b| compare_floats(a.fitness, b.fitness));

        self.telemetry.on_result(&self.evolution_state, self.evaluator.oracle().statistics());

        Ok((ranked, self.telemetry.get_metrics()))
    }

    fn run_generation(&mut self) -> Result<(), OptimizationError> {
        let generation_time = Timer::start();
        let random = self.environment.random.as_ref();

        let fitness = self.evaluator.fitness_many(&self.population)?;
        let (best_idx, best_fitness) = get_best(&fitness);
        let best_path = self.population[best_idx].clone();

        let population = std::mem::take(&mut self.population);
        let survivors = self.config.selector.select(population, &fitness, random);

        let mut offspring = create_offspring(&survivors, self.config.population_size, random);
        mutate_population(&mut offspring, self.config.mutation_probability, random);

        self.population = offspring;
        self.evolution_state.generation += 1;
        self.evolution_state.best_fitness.push(best_fitness);

        self.telemetry.on_generation(&self.evolution_state, (&best_path, best_fitness), generation_time);

        Ok(())
    }
}

fn get_best(fitness: &[Fitness]) -> (usize, Fitness) {
    fitness
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_floats_refs(a, b))
        .map(|(idx, &fitness)| (idx, fitness))
        .unwrap_or((0, Fitness::INFINITY))
}

use std::sync::Arc;

use tracing::{debug, info};

use super::{
    options::{EvolutionOptions, LogLevel},
    report::GenerationReport,
};
use crate::{
    breeding::{BreedStrategy, GenerationalStrategy},
    error::{GeneticError, OptionExt, Result},
    garden::Layout,
    genome::{evaluate_all, Genome, GenomeId},
    rng::RandomNumberGenerator,
    selection::ElitistSelection,
};

/// Lifecycle of an evolution run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    /// The initial population has been created and evaluated.
    Initialized,
    /// Generations are being bred.
    Running,
    /// The elite rakes every cell that is not a rock.
    Converged,
    /// The generation limit was reached without convergence.
    Exhausted,
}

/// Represents the result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The final elite genome.
    pub best: Genome,
    /// Either `Converged` or `Exhausted`.
    pub state: EvolutionState,
    /// Number of generations reported.
    pub generations: usize,
    /// Best fitness of every reported generation, in order.
    pub history: Vec<usize>,
}

impl EvolutionResult {
    pub fn fitness(&self) -> usize {
        self.best.fitness()
    }
}

/// Runs the generational loop over a garden layout.
///
/// Generation `g` reports the elite of the current population, stops if it
/// covers the whole garden, and otherwise breeds the next population. After
/// `max_generations` reports without convergence the run is exhausted and the
/// elite of the last reported generation is returned. No population is bred
/// past the last report.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy = GenerationalStrategy>
where
    Strategy: BreedStrategy,
{
    layout: Arc<Layout>,
    options: EvolutionOptions,
    strategy: Strategy,
}

impl EvolutionLauncher<GenerationalStrategy> {
    /// Creates a launcher using elitism with uniformly drawn parents.
    ///
    /// # Errors
    ///
    /// Returns the first configuration problem reported by
    /// [`EvolutionOptions::validate`].
    pub fn new(layout: Arc<Layout>, options: EvolutionOptions) -> Result<Self> {
        Self::with_strategy(layout, options, GenerationalStrategy::new())
    }
}

impl<Strategy> EvolutionLauncher<Strategy>
where
    Strategy: BreedStrategy,
{
    /// Creates a launcher with a custom breeding strategy.
    pub fn with_strategy(
        layout: Arc<Layout>,
        options: EvolutionOptions,
        strategy: Strategy,
    ) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            layout,
            options,
            strategy,
        })
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn max_fitness(&self) -> usize {
        self.layout.max_fitness()
    }

    /// Creates and evaluates the initial population. Ids run from 0.
    pub fn initialize(&self, rng: &mut RandomNumberGenerator) -> Vec<Genome> {
        let mut population: Vec<Genome> = (0..self.options.get_population_size() as GenomeId)
            .map(|id| Genome::random(id, self.layout.clone(), &self.options, rng))
            .collect();
        evaluate_all(&mut population, self.options.get_parallel_threshold());
        population
    }

    /// Evolves until convergence or the generation limit.
    pub fn evolve(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        self.evolve_with(rng, |_| {})
    }

    /// Evolves like [`EvolutionLauncher::evolve`], calling `observer` with the
    /// report of every generation.
    ///
    /// # Errors
    ///
    /// Returns an error if the breeding strategy fails.
    pub fn evolve_with<F>(
        &self,
        rng: &mut RandomNumberGenerator,
        mut observer: F,
    ) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationReport),
    {
        let log_level = *self.options.get_log_level();
        let max_fitness = self.max_fitness();

        let mut population = self.initialize(rng);
        let mut next_id = population.len() as GenomeId;
        let mut history = Vec::with_capacity(self.options.get_max_generations());
        let mut state = EvolutionState::Initialized;
        debug!(?state, population = population.len(), max_fitness, "evolution started");

        for generation in 0..self.options.get_max_generations() {
            let elite = self.elite(&population)?;
            let report = GenerationReport {
                generation,
                elite_id: elite.id(),
                best_fitness: elite.fitness(),
                max_fitness,
                snapshot: elite.snapshot(),
            };
            history.push(report.best_fitness);
            self.log_generation(log_level, &population, &report);
            observer(&report);

            if report.is_converged() {
                state = EvolutionState::Converged;
                if log_level != LogLevel::None {
                    info!(generation, fitness = report.best_fitness, "converged");
                }
                return Ok(EvolutionResult {
                    best: elite.clone(),
                    state,
                    generations: history.len(),
                    history,
                });
            }

            state = EvolutionState::Running;
            if generation + 1 == self.options.get_max_generations() {
                break;
            }
            population = self
                .strategy
                .breed(&population, &mut next_id, &self.options, rng)
                .map_err(|e| {
                    GeneticError::Breeding(format!(
                        "Failed to breed generation {}: {}",
                        generation + 1,
                        e
                    ))
                })?;
        }

        debug_assert_eq!(state, EvolutionState::Running);
        state = EvolutionState::Exhausted;
        // The last reported population; its elite is the last history entry.
        let best = self.elite(&population)?.clone();
        if log_level != LogLevel::None {
            info!(
                generations = history.len(),
                fitness = best.fitness(),
                max_fitness,
                "generation limit reached"
            );
        }

        Ok(EvolutionResult {
            best,
            state,
            generations: history.len(),
            history,
        })
    }

    fn elite<'a>(&self, population: &'a [Genome]) -> Result<&'a Genome> {
        ElitistSelection::best_index(population)
            .map(|idx| &population[idx])
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    fn log_generation(&self, level: LogLevel, population: &[Genome], report: &GenerationReport) {
        match level {
            LogLevel::None => {}
            LogLevel::Minimal => info!(
                generation = report.generation,
                best_fitness = report.best_fitness,
                max_fitness = report.max_fitness,
                "generation"
            ),
            LogLevel::Verbose => {
                info!(
                    generation = report.generation,
                    best_fitness = report.best_fitness,
                    max_fitness = report.max_fitness,
                    "generation"
                );
                for genome in population {
                    debug!(
                        generation = report.generation,
                        genome = genome.id(),
                        fitness = genome.fitness()
                    );
                }
                debug!("elite garden:\n{}", report.snapshot);
            }
        }
    }
}

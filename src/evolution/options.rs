//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every tunable of an evolution run:
//! population and genome sizes, the generation limit, the crossover mode
//! thresholds and the per-gene mutation rates.
//!
//! ## Example
//!
//! ```rust
//! use zen_garden::evolution::options::{EvolutionOptions, LogLevel, MutationMode};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .genes_per_genome(12)
//!     .max_generations(200)
//!     .mutation_mode(MutationMode::Exclusive)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Mutation modes
//!
//! After recombination every gene of a child is considered for two
//! mutations: full regeneration with probability `full` and tie-break
//! regeneration with probability `tie_shift`. [`MutationMode::Independent`]
//! draws both trials for every gene, so a regenerated gene may also receive a
//! fresh tie-break sequence. [`MutationMode::Exclusive`] only draws the
//! tie-break trial for genes that were not fully regenerated.

use crate::error::{ensure_probability, GeneticError, Result};

/// Verbosity of the progress events emitted through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

/// Upper bounds of the crossover mode intervals for a draw `p` in `[0, 1)`.
///
/// `p < single_point` selects single-point crossover, `p < uniform` selects
/// uniform crossover and anything else copies one whole parent.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossoverRates {
    pub single_point: f64,
    pub uniform: f64,
}

impl Default for CrossoverRates {
    fn default() -> Self {
        Self {
            single_point: 0.40,
            uniform: 0.80,
        }
    }
}

/// Per-gene mutation probabilities.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationRates {
    /// Probability that a gene is fully regenerated.
    pub full: f64,
    /// Probability that a gene's tie-break sequence is regenerated.
    pub tie_shift: f64,
}

impl Default for MutationRates {
    fn default() -> Self {
        Self {
            full: 0.05,
            tie_shift: 0.10,
        }
    }
}

/// How the two per-gene mutation trials combine.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationMode {
    /// Both trials are drawn for every gene and may both apply.
    #[default]
    Independent,
    /// The tie-break trial is only drawn when the gene was not regenerated.
    Exclusive,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    genes_per_genome: usize,
    max_generations: usize,
    /// Length of freshly generated tie-break sequences
    tie_break_len: usize,
    crossover: CrossoverRates,
    mutation: MutationRates,
    mutation_mode: MutationMode,
    /// Minimum number of genomes to evaluate in parallel
    parallel_threshold: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        genes_per_genome: usize,
        max_generations: usize,
        log_level: LogLevel,
    ) -> Self {
        Self {
            population_size,
            genes_per_genome,
            max_generations,
            log_level,
            ..Self::default()
        }
    }

    /// Checks every option, returning the first problem found.
    ///
    /// # Errors
    ///
    /// - `GeneticError::Configuration` for a zero population size, gene
    ///   count, generation limit or tie-break length, or crossover thresholds
    ///   that are not ordered.
    /// - `GeneticError::InvalidProbability` for a threshold or rate outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if self.genes_per_genome == 0 {
            return Err(GeneticError::Configuration(
                "Genes per genome cannot be zero".to_string(),
            ));
        }
        if self.max_generations == 0 {
            return Err(GeneticError::Configuration(
                "Maximum number of generations cannot be zero".to_string(),
            ));
        }
        if self.tie_break_len == 0 {
            return Err(GeneticError::Configuration(
                "Tie-break length cannot be zero".to_string(),
            ));
        }

        self.validate_rates()
    }

    /// Checks only the crossover thresholds and mutation probabilities.
    pub fn validate_rates(&self) -> Result<()> {
        ensure_probability("crossover.single_point", self.crossover.single_point)?;
        ensure_probability("crossover.uniform", self.crossover.uniform)?;
        ensure_probability("mutation.full", self.mutation.full)?;
        ensure_probability("mutation.tie_shift", self.mutation.tie_shift)?;

        if self.crossover.single_point > self.crossover.uniform {
            return Err(GeneticError::Configuration(format!(
                "Crossover thresholds must be ordered, got single_point {} > uniform {}",
                self.crossover.single_point, self.crossover.uniform
            )));
        }

        Ok(())
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_genes_per_genome(&self) -> usize {
        self.genes_per_genome
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_tie_break_len(&self) -> usize {
        self.tie_break_len
    }

    pub fn get_crossover(&self) -> &CrossoverRates {
        &self.crossover
    }

    pub fn get_mutation(&self) -> &MutationRates {
        &self.mutation
    }

    pub fn get_mutation_mode(&self) -> MutationMode {
        self.mutation_mode
    }

    /// Returns the minimum number of genomes to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_genes_per_genome(&mut self, genes_per_genome: usize) {
        self.genes_per_genome = genes_per_genome;
    }

    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    pub fn set_tie_break_len(&mut self, tie_break_len: usize) {
        self.tie_break_len = tie_break_len;
    }

    pub fn set_crossover(&mut self, crossover: CrossoverRates) {
        self.crossover = crossover;
    }

    pub fn set_mutation(&mut self, mutation: MutationRates) {
        self.mutation = mutation;
    }

    pub fn set_mutation_mode(&mut self, mutation_mode: MutationMode) {
        self.mutation_mode = mutation_mode;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            genes_per_genome: 20,
            max_generations: 500,
            tie_break_len: 16,
            crossover: CrossoverRates::default(),
            mutation: MutationRates::default(),
            mutation_mode: MutationMode::default(),
            parallel_threshold: 64,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    genes_per_genome: Option<usize>,
    max_generations: Option<usize>,
    tie_break_len: Option<usize>,
    crossover: Option<CrossoverRates>,
    mutation: Option<MutationRates>,
    mutation_mode: Option<MutationMode>,
    parallel_threshold: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn genes_per_genome(mut self, value: usize) -> Self {
        self.genes_per_genome = Some(value);
        self
    }

    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    pub fn tie_break_len(mut self, value: usize) -> Self {
        self.tie_break_len = Some(value);
        self
    }

    pub fn crossover(mut self, single_point: f64, uniform: f64) -> Self {
        self.crossover = Some(CrossoverRates {
            single_point,
            uniform,
        });
        self
    }

    pub fn mutation(mut self, full: f64, tie_shift: f64) -> Self {
        self.mutation = Some(MutationRates { full, tie_shift });
        self
    }

    pub fn mutation_mode(mut self, value: MutationMode) -> Self {
        self.mutation_mode = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Call
    /// [`EvolutionOptions::validate`] or hand the result to
    /// `EvolutionLauncher::new` to check it.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            genes_per_genome: self.genes_per_genome.unwrap_or(defaults.genes_per_genome),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            tie_break_len: self.tie_break_len.unwrap_or(defaults.tie_break_len),
            crossover: self.crossover.unwrap_or(defaults.crossover),
            mutation: self.mutation.unwrap_or(defaults.mutation),
            mutation_mode: self.mutation_mode.unwrap_or(defaults.mutation_mode),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = EvolutionOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.get_crossover(), &CrossoverRates::default());
        assert!((options.get_mutation().full - 0.05).abs() < f64::EPSILON);
        assert!((options.get_mutation().tie_shift - 0.10).abs() < f64::EPSILON);
        assert_eq!(options.get_mutation_mode(), MutationMode::Independent);
    }

    #[test]
    fn test_builder_overrides() {
        let options = EvolutionOptions::builder()
            .population_size(7)
            .genes_per_genome(3)
            .max_generations(11)
            .tie_break_len(4)
            .crossover(0.2, 0.6)
            .mutation(0.5, 0.25)
            .parallel_threshold(2)
            .build();

        assert_eq!(options.get_population_size(), 7);
        assert_eq!(options.get_genes_per_genome(), 3);
        assert_eq!(options.get_max_generations(), 11);
        assert_eq!(options.get_tie_break_len(), 4);
        assert!((options.get_crossover().uniform - 0.6).abs() < f64::EPSILON);
        assert!((options.get_mutation().tie_shift - 0.25).abs() < f64::EPSILON);
        assert_eq!(options.get_parallel_threshold(), 2);
        assert_eq!(options.get_log_level(), &LogLevel::None);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let cases = [
            EvolutionOptions::builder().population_size(0).build(),
            EvolutionOptions::builder().genes_per_genome(0).build(),
            EvolutionOptions::builder().max_generations(0).build(),
            EvolutionOptions::builder().tie_break_len(0).build(),
        ];
        for options in cases {
            assert!(matches!(
                options.validate(),
                Err(GeneticError::Configuration(_))
            ));
        }
    }

    #[test]
    fn test_probabilities_rejected() {
        let options = EvolutionOptions::builder().mutation(1.2, 0.1).build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::InvalidProbability {
                name: "mutation.full",
                ..
            })
        ));

        let options = EvolutionOptions::builder().crossover(-0.1, 0.8).build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::InvalidProbability { .. })
        ));
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let options = EvolutionOptions::builder().crossover(0.9, 0.5).build();
        assert!(matches!(
            options.validate(),
            Err(GeneticError::Configuration(_))
        ));
    }
}

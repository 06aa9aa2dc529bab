//! # Genome
//!
//! A genome is an ordered list of [`Gene`]s together with the garden buffer
//! they rake. Evaluating a genome resets the buffer to its layout and runs
//! every gene's walk in order, so later agents see the paths of earlier ones.
//! The fitness is the number of cells raked in total.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use zen_garden::garden::{Heading, Layout, Position};
//! use zen_garden::genome::{Gene, Genome};
//!
//! let layout = Arc::new(Layout::new(2, 2, []).unwrap());
//! let genes = vec![
//!     Gene::new(Position::new(0, 0), Heading::Down, vec![]),
//!     Gene::new(Position::new(1, 1), Heading::Up, vec![]),
//! ];
//! let genome = Genome::new(0, genes, layout);
//!
//! assert_eq!(genome.fitness(), 4);
//! ```

pub mod gene;

use std::sync::Arc;

use rayon::prelude::*;
use tracing::trace;

use crate::{
    evolution::options::EvolutionOptions,
    error::{GeneticError, Result},
    garden::{AgentId, Garden, GardenSnapshot, Layout, WalkExit},
    rng::RandomNumberGenerator,
};

pub use gene::{Gene, TieBreak};

/// Identifier of a genome, unique within one evolution run.
pub type GenomeId = u64;

/// Recombination mode picked for a single crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossoverMode {
    /// Genes before a random cut come from the first parent, the rest from the second.
    SinglePoint,
    /// Every position is copied from either parent with equal probability.
    Uniform,
    /// The whole gene sequence of one parent, chosen uniformly.
    WholeParent,
}

#[derive(Debug, Clone)]
pub struct Genome {
    id: GenomeId,
    genes: Vec<Gene>,
    fitness: usize,
    garden: Garden,
}

impl Genome {
    /// Creates a genome from `genes` and evaluates it on a fresh garden built from `layout`.
    pub fn new(id: GenomeId, genes: Vec<Gene>, layout: Arc<Layout>) -> Self {
        let mut genome = Self::unevaluated(id, genes, layout);
        genome.evaluate();
        genome
    }

    /// Creates a genome of `options.get_genes_per_genome()` random genes.
    ///
    /// The genome is not evaluated yet; its fitness reads zero until
    /// [`Genome::evaluate`] runs.
    pub fn random(
        id: GenomeId,
        layout: Arc<Layout>,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        let genes = (0..options.get_genes_per_genome())
            .map(|_| Gene::random(&layout, options.get_tie_break_len(), rng))
            .collect();
        Self::unevaluated(id, genes, layout)
    }

    fn unevaluated(id: GenomeId, genes: Vec<Gene>, layout: Arc<Layout>) -> Self {
        Self {
            id,
            genes,
            fitness: 0,
            garden: Garden::new(layout),
        }
    }

    pub fn id(&self) -> GenomeId {
        self.id
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    /// The garden as left by the last evaluation.
    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn layout(&self) -> &Arc<Layout> {
        self.garden.layout()
    }

    pub fn snapshot(&self) -> GardenSnapshot {
        self.garden.snapshot()
    }

    /// Rakes the garden from scratch with every gene in order and returns the new fitness.
    ///
    /// Agent ids start at 1 and only advance for genes whose walk actually
    /// started, so the ids in the garden are consecutive.
    pub fn evaluate(&mut self) -> usize {
        self.garden.reset();

        let mut agent: AgentId = 1;
        let mut total = 0;
        for gene in &self.genes {
            let outcome = gene.rake(&mut self.garden, agent);
            if outcome.exit != WalkExit::BlockedStart {
                agent += 1;
            }
            total += outcome.claimed;
        }

        trace!(genome = self.id, fitness = total, "evaluated");
        self.fitness = total;
        total
    }

    /// Breeds an evaluated child with `other`.
    ///
    /// One draw picks the recombination mode from `options.get_crossover()`,
    /// then every child gene goes through [`Gene::mutate`].
    ///
    /// # Errors
    ///
    /// Returns `Breeding` if the parents carry different numbers of genes, and
    /// the error of [`EvolutionOptions::validate_rates`] for unusable rates.
    pub fn crossover(
        &self,
        other: &Self,
        id: GenomeId,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let mut child = self.offspring(other, id, options, rng)?;
        child.evaluate();
        Ok(child)
    }

    /// Recombines and mutates like [`Genome::crossover`] but leaves the child unevaluated.
    pub(crate) fn offspring(
        &self,
        other: &Self,
        id: GenomeId,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        options.validate_rates()?;
        let mode = crossover_mode(options, rng.gen_unit());
        let genes = self.recombine(other, mode, rng)?;
        let mut child = Self::unevaluated(id, genes, self.layout().clone());
        child.mutate(options, rng);
        Ok(child)
    }

    /// Builds a child gene sequence from `self` and `other` using `mode`.
    ///
    /// # Errors
    ///
    /// Returns `Breeding` if the parents carry different numbers of genes.
    pub fn recombine(
        &self,
        other: &Self,
        mode: CrossoverMode,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Gene>> {
        if self.genes.len() != other.genes.len() {
            return Err(GeneticError::Breeding(format!(
                "Parents {} and {} carry {} and {} genes",
                self.id,
                other.id,
                self.genes.len(),
                other.genes.len()
            )));
        }
        if self.genes.is_empty() {
            return Ok(Vec::new());
        }

        let genes = match mode {
            CrossoverMode::SinglePoint => {
                let cut = rng.gen_index(self.genes.len());
                self.genes[..cut]
                    .iter()
                    .chain(&other.genes[cut..])
                    .cloned()
                    .collect()
            }
            CrossoverMode::Uniform => self
                .genes
                .iter()
                .zip(&other.genes)
                .map(|(a, b)| (if rng.gen_bool(0.5) { a } else { b }).clone())
                .collect(),
            CrossoverMode::WholeParent => {
                if rng.gen_bool(0.5) {
                    self.genes.clone()
                } else {
                    other.genes.clone()
                }
            }
        };
        Ok(genes)
    }

    /// Runs the per-gene mutation trials over every gene. Fitness is not updated.
    ///
    /// # Panics
    ///
    /// Panics if a mutation rate of `options` lies outside `[0, 1]`.
    pub fn mutate(&mut self, options: &EvolutionOptions, rng: &mut RandomNumberGenerator) {
        let layout = self.garden.layout().clone();
        for gene in self.genes.iter_mut() {
            gene.mutate(
                &layout,
                options.get_mutation(),
                options.get_mutation_mode(),
                rng,
            );
        }
    }
}

/// Evaluates every genome, on the rayon pool once the batch reaches `parallel_threshold`.
///
/// Evaluation draws no random numbers, so both paths produce identical fitness values.
pub fn evaluate_all(genomes: &mut [Genome], parallel_threshold: usize) {
    if genomes.len() >= parallel_threshold {
        genomes.par_iter_mut().for_each(|genome| {
            genome.evaluate();
        });
    } else {
        for genome in genomes.iter_mut() {
            genome.evaluate();
        }
    }
}

/// Maps a uniform draw in `[0, 1)` onto a crossover mode.
pub fn crossover_mode(options: &EvolutionOptions, p: f64) -> CrossoverMode {
    let rates = options.get_crossover();
    if p < rates.single_point {
        CrossoverMode::SinglePoint
    } else if p < rates.uniform {
        CrossoverMode::Uniform
    } else {
        CrossoverMode::WholeParent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::{Cell, Heading, Position};

    fn layout(width: usize, height: usize, rocks: &[(usize, usize)]) -> Arc<Layout> {
        Arc::new(Layout::new(width, height, rocks.iter().copied()).unwrap())
    }

    #[test]
    fn test_crossover_mode_thresholds() {
        let options = EvolutionOptions::default();
        assert_eq!(crossover_mode(&options, 0.0), CrossoverMode::SinglePoint);
        assert_eq!(crossover_mode(&options, 0.39), CrossoverMode::SinglePoint);
        assert_eq!(crossover_mode(&options, 0.40), CrossoverMode::Uniform);
        assert_eq!(crossover_mode(&options, 0.79), CrossoverMode::Uniform);
        assert_eq!(crossover_mode(&options, 0.80), CrossoverMode::WholeParent);
        assert_eq!(crossover_mode(&options, 0.999), CrossoverMode::WholeParent);
    }

    #[test]
    fn test_evaluate_all_parallel_matches_sequential() {
        let layout = layout(8, 6, &[(2, 3), (4, 1), (1, 6)]);
        let options = EvolutionOptions::builder().genes_per_genome(10).build();
        let mut rng = RandomNumberGenerator::from_seed(31);
        let mut sequential: Vec<Genome> = (0..16)
            .map(|id| Genome::random(id, layout.clone(), &options, &mut rng))
            .collect();
        let mut parallel = sequential.clone();

        evaluate_all(&mut sequential, usize::MAX);
        evaluate_all(&mut parallel, 1);

        let a: Vec<usize> = sequential.iter().map(Genome::fitness).collect();
        let b: Vec<usize> = parallel.iter().map(Genome::fitness).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(|&f| f <= 8 * 6 - 3));
    }

    #[test]
    fn test_blocked_gene_does_not_consume_agent_id() {
        let layout = layout(3, 3, &[]);
        let genes = vec![
            Gene::new(Position::new(0, 0), Heading::Right, vec![]),
            // Starts on a cell raked by the first agent.
            Gene::new(Position::new(0, 2), Heading::Down, vec![]),
            Gene::new(Position::new(2, 0), Heading::Right, vec![]),
        ];
        let genome = Genome::new(1, genes, layout);

        assert_eq!(genome.fitness(), 6);
        assert_eq!(genome.garden().get(Position::new(0, 1)), Cell::Raked(1));
        assert_eq!(genome.garden().get(Position::new(2, 2)), Cell::Raked(2));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let layout = layout(6, 5, &[(1, 2), (3, 3)]);
        let options = EvolutionOptions::builder().genes_per_genome(6).build();
        let mut rng = RandomNumberGenerator::from_seed(17);
        let mut genome = Genome::random(0, layout, &options, &mut rng);

        let first = genome.evaluate();
        let snapshot = genome.snapshot();
        let second = genome.evaluate();

        assert_eq!(first, second);
        assert_eq!(snapshot, genome.snapshot());
    }

    #[test]
    fn test_recombine_modes_draw_from_parents() {
        let layout = layout(5, 5, &[]);
        let options = EvolutionOptions::builder().genes_per_genome(8).build();
        let mut rng = RandomNumberGenerator::from_seed(23);
        let a = Genome::random(0, layout.clone(), &options, &mut rng);
        let b = Genome::random(1, layout, &options, &mut rng);

        for mode in [
            CrossoverMode::SinglePoint,
            CrossoverMode::Uniform,
            CrossoverMode::WholeParent,
        ] {
            let genes = a.recombine(&b, mode, &mut rng).unwrap();
            assert_eq!(genes.len(), 8);
            for (i, gene) in genes.iter().enumerate() {
                assert!(gene == &a.genes()[i] || gene == &b.genes()[i]);
            }
            if mode == CrossoverMode::WholeParent {
                assert!(genes == a.genes() || genes == b.genes());
            }
        }
    }

    #[test]
    fn test_single_point_prefix_and_suffix() {
        let layout = layout(5, 5, &[]);
        let options = EvolutionOptions::builder().genes_per_genome(6).build();
        let mut rng = RandomNumberGenerator::from_seed(29);
        let a = Genome::random(0, layout.clone(), &options, &mut rng);
        let b = Genome::random(1, layout, &options, &mut rng);

        for _ in 0..20 {
            let genes = a.recombine(&b, CrossoverMode::SinglePoint, &mut rng).unwrap();
            let cut = genes
                .iter()
                .zip(a.genes())
                .take_while(|(child, parent)| child == parent)
                .count();
            assert_eq!(&genes[cut..], &b.genes()[cut..]);
        }
    }

    #[test]
    fn test_crossover_rejects_mismatched_parents() {
        let layout = layout(5, 5, &[]);
        let long = EvolutionOptions::builder().genes_per_genome(6).build();
        let short = EvolutionOptions::builder().genes_per_genome(3).build();
        let mut rng = RandomNumberGenerator::from_seed(37);
        let a = Genome::random(0, layout.clone(), &long, &mut rng);
        let b = Genome::random(1, layout, &short, &mut rng);

        for mode in [
            CrossoverMode::SinglePoint,
            CrossoverMode::Uniform,
            CrossoverMode::WholeParent,
        ] {
            assert!(matches!(
                a.recombine(&b, mode, &mut rng),
                Err(GeneticError::Breeding(_))
            ));
        }
        assert!(matches!(
            b.crossover(&a, 2, &long, &mut rng),
            Err(GeneticError::Breeding(_))
        ));
    }

    #[test]
    fn test_crossover_rejects_invalid_rates() {
        let layout = layout(4, 4, &[]);
        let options = EvolutionOptions::builder().genes_per_genome(3).build();
        let mut rng = RandomNumberGenerator::from_seed(41);
        let a = Genome::random(0, layout.clone(), &options, &mut rng);
        let b = Genome::random(1, layout, &options, &mut rng);

        let bad_mutation = EvolutionOptions::builder()
            .genes_per_genome(3)
            .mutation(1.2, 0.1)
            .build();
        assert!(matches!(
            a.crossover(&b, 2, &bad_mutation, &mut rng),
            Err(GeneticError::InvalidProbability { name: "mutation.full", .. })
        ));

        let bad_crossover = EvolutionOptions::builder()
            .genes_per_genome(3)
            .crossover(0.4, -0.5)
            .build();
        assert!(a.crossover(&b, 3, &bad_crossover, &mut rng).is_err());
    }
}

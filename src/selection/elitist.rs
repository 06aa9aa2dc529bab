use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects the fittest genomes.
///
/// Genomes are ranked by fitness, highest first. Ties keep population order,
/// so the genome that appears first wins. This is how the elite of a
/// generation is chosen.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Index of the fittest genome, or `None` for an empty population.
    pub fn best_index(population: &[Genome]) -> Option<usize> {
        population
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, usize)>, (idx, genome)| match best {
                Some((_, fitness)) if fitness >= genome.fitness() => best,
                _ => Some((idx, genome.fitness())),
            })
            .map(|(idx, _)| idx)
    }
}

impl SelectionStrategy for ElitistSelection {
    fn select(
        &self,
        population: &[Genome],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let mut ranked: Vec<usize> = (0..population.len()).collect();
        // Stable sort keeps population order among equal fitness.
        ranked.sort_by(|&a, &b| population[b].fitness().cmp(&population[a].fitness()));
        ranked.truncate(num_to_select);

        Ok(ranked)
    }
}

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that ignores fitness and draws distinct genomes
/// uniformly at random.
///
/// Used to pick crossover parents: selection pressure comes only from the
/// elite surviving each generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct UniformSelection;

impl UniformSelection {
    pub fn new() -> Self {
        Self
    }
}

impl SelectionStrategy for UniformSelection {
    fn select(
        &self,
        population: &[Genome],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        rng.sample_indices(population.len(), num_to_select)
            .ok_or_else(|| {
                GeneticError::Breeding(format!(
                    "Cannot draw {} distinct genomes from a population of {}",
                    num_to_select,
                    population.len()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::evolution::options::EvolutionOptions;
    use crate::garden::Layout;

    fn population(size: u64) -> Vec<Genome> {
        let layout = Arc::new(Layout::new(4, 4, []).unwrap());
        let options = EvolutionOptions::builder().genes_per_genome(2).build();
        let mut rng = RandomNumberGenerator::from_seed(2);
        (0..size)
            .map(|id| Genome::random(id, layout.clone(), &options, &mut rng))
            .collect()
    }

    #[test]
    fn test_uniform_selection_distinct() {
        let population = population(5);
        let mut rng = RandomNumberGenerator::from_seed(8);

        for _ in 0..100 {
            let selected = UniformSelection::new()
                .select(&population, 2, &mut rng)
                .unwrap();
            assert_eq!(selected.len(), 2);
            assert_ne!(selected[0], selected[1]);
            assert!(selected.iter().all(|&idx| idx < 5));
        }
    }

    #[test]
    fn test_uniform_selection_covers_population() {
        let population = population(4);
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut seen = [false; 4];

        for _ in 0..200 {
            for idx in UniformSelection::new()
                .select(&population, 2, &mut rng)
                .unwrap()
            {
                seen[idx] = true;
            }
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_uniform_selection_too_small() {
        let population = population(1);
        let mut rng = RandomNumberGenerator::from_seed(8);

        let result = UniformSelection::new().select(&population, 2, &mut rng);

        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }
}

//! # GenerationalStrategy
//!
//! The `GenerationalStrategy` replaces the whole population every generation
//! except for its single fittest genome, which is carried over unchanged. The
//! remaining slots are filled with children of parent pairs drawn by a
//! [`SelectionStrategy`], uniformly at random by default.
use tracing::debug;

use super::BreedStrategy;
use crate::{
    error::{GeneticError, OptionExt, Result},
    evolution::options::EvolutionOptions,
    genome::{evaluate_all, Genome, GenomeId},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, SelectionStrategy, UniformSelection},
};

#[derive(Debug, Clone, Default)]
pub struct GenerationalStrategy<S = UniformSelection>
where
    S: SelectionStrategy + Clone,
{
    parent_selection: S,
}

impl GenerationalStrategy<UniformSelection> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> GenerationalStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    /// Creates a strategy that draws crossover parents with `parent_selection`.
    pub fn with_parent_selection(parent_selection: S) -> Self {
        Self { parent_selection }
    }
}

impl<S> BreedStrategy for GenerationalStrategy<S>
where
    S: SelectionStrategy + Clone,
{
    /// Carries the elite over and fills `population_size - 1` slots with children.
    ///
    /// Children are recombined and mutated in order on `rng`. When their
    /// number reaches the parallel threshold of `options` they are evaluated
    /// on the rayon pool afterwards; the random draws are the same either way.
    fn breed(
        &self,
        population: &[Genome],
        next_id: &mut GenomeId,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>> {
        let elite = ElitistSelection::new()
            .select(population, 1, rng)?
            .first()
            .copied()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

        let slots = options.get_population_size().saturating_sub(1);
        let parallel = slots >= options.get_parallel_threshold();
        let mut children = Vec::with_capacity(slots);

        for _ in 0..slots {
            let parents = self.parent_selection.select(population, 2, rng)?;
            let (a, b) = match parents.as_slice() {
                [a, b] => (&population[*a], &population[*b]),
                _ => {
                    return Err(GeneticError::Breeding(format!(
                        "Expected two parents, got {}",
                        parents.len()
                    )))
                }
            };

            let id = *next_id;
            *next_id += 1;
            if parallel {
                children.push(a.offspring(b, id, options, rng)?);
            } else {
                children.push(a.crossover(b, id, options, rng)?);
            }
        }

        if parallel {
            evaluate_all(&mut children, 0);
        }
        debug!(elite = population[elite].id(), children = children.len(), "bred generation");

        let mut next = Vec::with_capacity(slots + 1);
        next.push(population[elite].clone());
        next.extend(children);
        Ok(next)
    }
}

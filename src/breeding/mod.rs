//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! building the next population of genomes from the current one.
pub mod generational;

use std::fmt::Debug;

use crate::{
    error::Result,
    evolution::options::EvolutionOptions,
    genome::{Genome, GenomeId},
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Builds the next generation from `population`. Every returned genome must
/// be evaluated, and new genomes take consecutive ids starting at `*next_id`,
/// which the strategy advances past the last id it used.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds the next population.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The population is empty
    /// - The population is too small to draw the parents it needs
    fn breed(
        &self,
        population: &[Genome],
        next_id: &mut GenomeId,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;
}

pub use generational::GenerationalStrategy;

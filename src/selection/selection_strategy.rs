use std::fmt::Debug;

use crate::error::Result;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Trait for strategies that pick genomes out of a population.
///
/// Strategies return indices into `population` rather than clones, so the
/// caller decides whether to copy an elite or only borrow a parent.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use zen_garden::garden::{Heading, Layout, Position};
/// use zen_garden::genome::{Gene, Genome};
/// use zen_garden::rng::RandomNumberGenerator;
/// use zen_garden::selection::{ElitistSelection, SelectionStrategy};
///
/// let layout = Arc::new(Layout::new(3, 3, []).unwrap());
/// let population = vec![
///     Genome::new(0, vec![Gene::new(Position::new(0, 0), Heading::Right, vec![])], layout.clone()),
///     Genome::new(1, vec![Gene::new(Position::new(0, 0), Heading::Down, vec![])], layout.clone()),
///     Genome::new(2, vec![Gene::new(Position::new(1, 1), Heading::Down, vec![])], layout),
/// ];
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// // The first two genomes tie on fitness 3; the earlier one wins.
/// let best = ElitistSelection::default().select(&population, 1, &mut rng).unwrap();
/// assert_eq!(best, vec![0]);
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` genomes from `population`, returning their indices.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The strategy cannot provide `num_to_select` indices
    fn select(
        &self,
        population: &[Genome],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<usize>>;
}

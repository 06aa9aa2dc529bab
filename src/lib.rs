//! Evolutionary search for zen garden rakings.
//!
//! A [`garden::Layout`] fixes the rocks of a rectangular garden. Agents enter
//! from the perimeter and rake straight lines, turning at obstructions, until
//! they leave the garden or get boxed in. A [`genome::Genome`] is an ordered
//! list of such agents, and its fitness is the number of cells they rake
//! together. [`evolution::EvolutionLauncher`] evolves a population of genomes
//! with elitism, crossover and mutation until one of them rakes every cell
//! that is not a rock, or a generation limit is reached.
//!
//! ```rust
//! use std::sync::Arc;
//! use zen_garden::{
//!     evolution::{EvolutionLauncher, EvolutionOptions},
//!     garden::Layout,
//!     rng::RandomNumberGenerator,
//! };
//!
//! let layout = Arc::new(Layout::new(6, 5, [(1, 2), (3, 4)]).unwrap());
//! let options = EvolutionOptions::builder()
//!     .population_size(30)
//!     .genes_per_genome(8)
//!     .max_generations(40)
//!     .build();
//! let launcher = EvolutionLauncher::new(layout, options).unwrap();
//!
//! let result = launcher.evolve(&mut RandomNumberGenerator::from_seed(1)).unwrap();
//! assert!(result.fitness() <= launcher.max_fitness());
//! println!("{}", result.best.snapshot());
//! ```

pub mod breeding;
pub mod error;
pub mod evolution;
pub mod garden;
pub mod genome;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};

//! # Error Types
//!
//! This module defines the error type shared by every part of the crate.
//! Errors surface while a garden or an evolution run is being configured, or
//! when genomes that cannot be bred together are crossed. Raking itself
//! absorbs every obstruction into the fitness outcome.
//!
//! ## Examples
//!
//! ```rust
//! use zen_garden::error::{GeneticError, OptionExt, Result};
//!
//! fn best_fitness(scores: &[usize]) -> Result<usize> {
//!     scores.iter().max().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_fitness(&[3, 7, 5]).unwrap(), 7);
//! assert!(best_fitness(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while setting up or running an evolution.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when a rock is placed outside the garden.
    #[error("Bounds error: {0}")]
    OutOfBounds(String),

    /// Error that occurs when a probability or threshold lies outside `[0, 1]`.
    #[error("Invalid probability for {name}: {value} is not within [0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a breeding operation fails.
    #[error("Breeding error: {0}")]
    Breeding(String),
}

/// A specialized Result type for garden and evolution operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks that `value` is a probability, returning `InvalidProbability` otherwise.
pub(crate) fn ensure_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GeneticError::InvalidProbability { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_probability() {
        assert!(ensure_probability("p", 0.0).is_ok());
        assert!(ensure_probability("p", 1.0).is_ok());
        assert!(ensure_probability("p", -0.01).is_err());
        assert!(ensure_probability("p", f64::NAN).is_err());

        match ensure_probability("p_full", 1.5) {
            Err(GeneticError::InvalidProbability { name, value }) => {
                assert_eq!(name, "p_full");
                assert!((value - 1.5).abs() < f64::EPSILON);
            }
            _ => panic!("Expected InvalidProbability error"),
        }
    }

    #[test]
    fn test_error_messages() {
        let err = GeneticError::Configuration("Population size cannot be zero".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: Population size cannot be zero"
        );
        assert!(GeneticError::EmptyPopulation
            .to_string()
            .contains("empty population"));
    }
}

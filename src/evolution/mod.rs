pub mod launcher;
pub mod options;
pub mod report;

pub use launcher::{EvolutionLauncher, EvolutionResult, EvolutionState};
pub use options::{CrossoverRates, EvolutionOptions, LogLevel, MutationMode, MutationRates};
pub use report::GenerationReport;

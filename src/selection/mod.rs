pub mod elitist;
pub mod selection_strategy;
pub mod uniform;

pub use elitist::ElitistSelection;
pub use selection_strategy::SelectionStrategy;
pub use uniform::UniformSelection;

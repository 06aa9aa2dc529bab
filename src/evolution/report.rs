use crate::garden::GardenSnapshot;
use crate::genome::GenomeId;

/// Progress of an evolution run, handed to observers once per generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Zero-based generation index; generation 0 is the initial population.
    pub generation: usize,
    /// Id of the elite genome of this generation.
    pub elite_id: GenomeId,
    pub best_fitness: usize,
    pub max_fitness: usize,
    /// The elite's garden after its last evaluation.
    pub snapshot: GardenSnapshot,
}

impl GenerationReport {
    /// `true` once the elite rakes every cell that is not a rock.
    pub fn is_converged(&self) -> bool {
        self.best_fitness == self.max_fitness
    }

    /// Fraction of rakeable cells covered by the elite.
    pub fn coverage(&self) -> f64 {
        if self.max_fitness == 0 {
            1.0
        } else {
            self.best_fitness as f64 / self.max_fitness as f64
        }
    }
}

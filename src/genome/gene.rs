//! # Gene
//!
//! A gene describes one raking agent: where it enters the garden, which way it
//! walks in, and how it resolves turns where both lateral cells are free.

use crate::{
    evolution::options::{MutationMode, MutationRates},
    garden::{rake, AgentId, Garden, Heading, Layout, Position, RakeOutcome},
    rng::RandomNumberGenerator,
};

/// Choice between the two lateral cells when both are free.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TieBreak {
    First,
    Second,
}

impl TieBreak {
    fn random(rng: &mut RandomNumberGenerator) -> Self {
        if rng.gen_bool(0.5) {
            TieBreak::First
        } else {
            TieBreak::Second
        }
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gene {
    start: Position,
    heading: Heading,
    tie_break: Vec<TieBreak>,
}

impl Gene {
    pub fn new(start: Position, heading: Heading, tie_break: Vec<TieBreak>) -> Self {
        Self {
            start,
            heading,
            tie_break,
        }
    }

    /// Creates a gene entering through a uniformly random perimeter cell, with
    /// a random tie-break sequence of `tie_break_len` entries.
    pub fn random(layout: &Layout, tie_break_len: usize, rng: &mut RandomNumberGenerator) -> Self {
        let mut gene = Self {
            start: Position::new(0, 0),
            heading: Heading::Down,
            tie_break: vec![TieBreak::First; tie_break_len],
        };
        gene.regenerate(layout, rng);
        gene
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn tie_break(&self) -> &[TieBreak] {
        &self.tie_break
    }

    /// Moves the gene to a uniformly random perimeter cell and points it inward.
    pub fn randomize(&mut self, layout: &Layout, rng: &mut RandomNumberGenerator) {
        let entries = layout.entry_points();
        let (start, heading) = entries[rng.gen_index(entries.len())];
        self.start = start;
        self.heading = heading;
    }

    /// Replaces the tie-break sequence with a random one of the same length.
    pub fn regenerate_tie_break(&mut self, rng: &mut RandomNumberGenerator) {
        for tie in self.tie_break.iter_mut() {
            *tie = TieBreak::random(rng);
        }
    }

    /// Re-randomizes the start cell, heading and tie-break sequence.
    pub fn regenerate(&mut self, layout: &Layout, rng: &mut RandomNumberGenerator) {
        self.randomize(layout, rng);
        self.regenerate_tie_break(rng);
    }

    /// Applies the per-gene mutation trials.
    ///
    /// # Panics
    ///
    /// Panics if a rate lies outside `[0, 1]`. [`EvolutionOptions::validate`]
    /// rejects such rates before a run starts.
    ///
    /// [`EvolutionOptions::validate`]: crate::evolution::options::EvolutionOptions::validate
    pub fn mutate(
        &mut self,
        layout: &Layout,
        rates: &MutationRates,
        mode: MutationMode,
        rng: &mut RandomNumberGenerator,
    ) {
        let regenerated = rng.gen_bool(rates.full);
        if regenerated {
            self.regenerate(layout, rng);
        }

        let shift = match mode {
            MutationMode::Independent => rng.gen_bool(rates.tie_shift),
            MutationMode::Exclusive => !regenerated && rng.gen_bool(rates.tie_shift),
        };
        if shift {
            self.regenerate_tie_break(rng);
        }
    }

    /// Runs this gene's raking walk on `garden` as `agent`.
    pub fn rake(&self, garden: &mut Garden, agent: AgentId) -> RakeOutcome {
        rake(garden, self.start, self.heading, &self.tie_break, agent)
    }
}

//! # Raking walks
//!
//! [`rake`] simulates one agent walking through a garden. The agent rakes
//! every empty cell it stands on and keeps its heading until the cell ahead is
//! obstructed. It then turns towards whichever neighbour of its current cell
//! is free, consulting its tie-break sequence when both are. A walk ends in
//! one of three ways, reported as [`WalkExit`]:
//!
//! - the start cell was already a rock or raked,
//! - the next step leaves the garden,
//! - the agent is boxed in with no free lateral cell.
//!
//! None of these are errors. Each step moves onto an empty cell that is
//! raked on arrival, so a walk never takes more steps than the garden has cells.

use tracing::trace;

use super::{AgentId, Garden, Heading, Position};
use crate::genome::gene::TieBreak;

/// Why a raking walk stopped.
///
/// Every step lands on an empty cell, so a walk that is not enclosed always
/// stops by leaving the garden. That normal stop is reported as
/// [`WalkExit::Boundary`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkExit {
    /// The start cell was not empty; nothing was raked.
    BlockedStart,
    /// The agent walked out of the garden.
    Boundary,
    /// The cell ahead and both lateral cells were obstructed.
    Enclosed,
}

/// The result of a single raking walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RakeOutcome {
    /// Cells that went from empty to raked during this walk.
    pub claimed: usize,
    pub exit: WalkExit,
}

/// Rakes `garden` starting at `start` along `heading`, marking cells with `agent`.
///
/// `tie_break` is consulted cyclically, from its first entry, every time both
/// lateral cells are free. An empty sequence always resolves to
/// [`TieBreak::First`].
///
/// # Panics
///
/// Panics if `start` lies outside the garden.
pub fn rake(
    garden: &mut Garden,
    start: Position,
    heading: Heading,
    tie_break: &[TieBreak],
    agent: AgentId,
) -> RakeOutcome {
    if !garden.claim(start, agent) {
        trace!(agent, ?start, "start cell obstructed");
        return RakeOutcome {
            claimed: 0,
            exit: WalkExit::BlockedStart,
        };
    }

    let layout = garden.layout().clone();
    let mut claimed = 1;
    let mut position = start;
    let mut heading = heading;
    let mut ties = tie_break.iter().copied().cycle();

    let exit = loop {
        let Some(ahead) = layout.step(position, heading) else {
            break WalkExit::Boundary;
        };

        if !garden.is_free(ahead) {
            let [first, second] = heading.laterals();
            let open = |h: Heading| {
                layout
                    .step(position, h)
                    .filter(|&cell| garden.is_free(cell))
                    .is_some()
            };

            heading = match (open(first), open(second)) {
                (true, true) => match ties.next().unwrap_or(TieBreak::First) {
                    TieBreak::First => first,
                    TieBreak::Second => second,
                },
                (true, false) => first,
                (false, true) => second,
                (false, false) => break WalkExit::Enclosed,
            };
            trace!(agent, ?position, ?heading, "turned");
            continue;
        }

        position = ahead;
        if garden.claim(position, agent) {
            claimed += 1;
        }
    };

    trace!(agent, claimed, ?exit, "walk finished");
    RakeOutcome { claimed, exit }
}

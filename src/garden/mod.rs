//! # Garden
//!
//! The garden is split in two layers:
//!
//! - [`Layout`] is the immutable base of a puzzle: its dimensions, the rock
//!   mask and the cached entry points. It is built once and shared behind an `Arc`.
//! - [`Garden`] is a mutable cell buffer derived from a layout. Every genome
//!   owns one, and raking walks write ownership marks into it.
//!
//! Rocks are copied from the layout into every buffer and are never altered,
//! so all gardens derived from the same layout agree on their obstacles.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use zen_garden::garden::{Cell, Garden, Layout, Position};
//!
//! let layout = Arc::new(Layout::new(4, 3, [(1, 2)]).unwrap());
//! let garden = Garden::new(layout.clone());
//!
//! assert_eq!(layout.max_fitness(), 11);
//! assert_eq!(garden.get(Position::new(1, 2)), Cell::Rock);
//! ```

pub mod heading;
pub mod snapshot;
pub mod tracer;

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{GeneticError, Result};

pub use heading::Heading;
pub use snapshot::GardenSnapshot;
pub use tracer::{rake, RakeOutcome, WalkExit};

/// Identifier of the agent that raked a cell. Ids start at 1 within a genome.
pub type AgentId = u32;

/// A cell coordinate, `row` counted from the top and `col` from the left.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// The state of one garden cell.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Rock,
    Raked(AgentId),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The immutable base of a puzzle instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    rocks: Vec<bool>,
    rock_count: usize,
    entries: Vec<(Position, Heading)>,
}

impl Layout {
    /// Builds a layout from its dimensions and a set of `(row, col)` rock coordinates.
    ///
    /// Duplicate rock coordinates are collapsed.
    ///
    /// # Errors
    ///
    /// - `GeneticError::Configuration` if `width` or `height` is zero.
    /// - `GeneticError::OutOfBounds` if a rock lies outside the garden.
    pub fn new<I>(width: usize, height: usize, rocks: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        if width == 0 || height == 0 {
            return Err(GeneticError::Configuration(format!(
                "Garden dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let mut mask = vec![false; width * height];
        let mut unique = HashSet::new();
        for rock in rocks {
            let rock = Position::from(rock);
            if rock.row >= height || rock.col >= width {
                return Err(GeneticError::OutOfBounds(format!(
                    "Rock at ({}, {}) lies outside the {}x{} garden",
                    rock.row, rock.col, width, height
                )));
            }
            if unique.insert(rock) {
                mask[rock.row * width + rock.col] = true;
            }
        }

        Ok(Self {
            width,
            height,
            rocks: mask,
            rock_count: unique.len(),
            entries: entry_points(width, height),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rock_count(&self) -> usize {
        self.rock_count
    }

    pub fn is_rock(&self, position: Position) -> bool {
        self.rocks[self.index(position)]
    }

    /// Number of cells a perfect raking covers: every cell that is not a rock.
    pub fn max_fitness(&self) -> usize {
        self.width * self.height - self.rock_count
    }

    /// Perimeter cells paired with their inward heading, in enumeration
    /// order: top row, bottom row, then the left and right columns without
    /// their corners.
    pub fn entry_points(&self) -> &[(Position, Heading)] {
        &self.entries
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    /// The neighbour one step along `heading`, or `None` past the boundary.
    pub fn step(&self, position: Position, heading: Heading) -> Option<Position> {
        let (dr, dc) = heading.delta();
        let row = position.row.checked_add_signed(dr)?;
        let col = position.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.contains(next).then_some(next)
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.width + position.col
    }
}

fn entry_points(width: usize, height: usize) -> Vec<(Position, Heading)> {
    let mut cells: Vec<Position> = (0..width).map(|col| Position::new(0, col)).collect();
    if height > 1 {
        cells.extend((0..width).map(|col| Position::new(height - 1, col)));
    }
    for row in 1..height.saturating_sub(1) {
        cells.push(Position::new(row, 0));
        if width > 1 {
            cells.push(Position::new(row, width - 1));
        }
    }
    cells
        .into_iter()
        .filter_map(|cell| Heading::inward(cell, width, height).map(|heading| (cell, heading)))
        .collect()
}

/// A per-genome cell buffer cloned from a shared [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    layout: Arc<Layout>,
    cells: Vec<Cell>,
}

impl Garden {
    /// Creates an unraked garden from `layout`.
    pub fn new(layout: Arc<Layout>) -> Self {
        let cells = layout
            .rocks
            .iter()
            .map(|&rock| if rock { Cell::Rock } else { Cell::Empty })
            .collect();
        Self { layout, cells }
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    pub fn width(&self) -> usize {
        self.layout.width
    }

    pub fn height(&self) -> usize {
        self.layout.height
    }

    /// Returns the cell at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the garden.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[self.layout.index(position)]
    }

    /// `true` if `position` is inside the garden and not yet raked or rocky.
    pub fn is_free(&self, position: Position) -> bool {
        self.layout.contains(position) && self.get(position).is_empty()
    }

    /// Marks an empty cell as raked by `agent`. Returns `false` and leaves the
    /// cell untouched if it is a rock or already raked.
    pub fn claim(&mut self, position: Position, agent: AgentId) -> bool {
        let idx = self.layout.index(position);
        if self.cells[idx].is_empty() {
            self.cells[idx] = Cell::Raked(agent);
            true
        } else {
            false
        }
    }

    /// Clears every ownership mark, restoring the layout's base state.
    pub fn reset(&mut self) {
        for cell in self.cells.iter_mut() {
            if let Cell::Raked(_) = cell {
                *cell = Cell::Empty;
            }
        }
    }

    /// Number of raked cells.
    pub fn raked_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Raked(_)))
            .count()
    }

    pub fn snapshot(&self) -> GardenSnapshot {
        GardenSnapshot::new(self.width(), self.height(), self.cells.clone())
    }
}

use std::fmt;

use super::{Cell, Position};

/// An owned copy of a garden's cells, handed to reporting code.
///
/// `Display` renders one line per row with every cell right aligned in a
/// two character column: rocks as `K`, empty cells as `0` and raked cells as
/// the id of the agent that raked them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenSnapshot {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl GardenSnapshot {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.row * self.width + position.col]
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for GardenSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => format!("{:>2}", 0),
                    Cell::Rock => format!("{:>2}", "K"),
                    Cell::Raked(id) => format!("{:>2}", id),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::garden::{Garden, Heading, Layout};

    #[test]
    fn test_display() {
        let layout = Arc::new(Layout::new(3, 2, [(1, 1)]).unwrap());
        let mut garden = Garden::new(layout);
        crate::garden::rake(&mut garden, Position::new(0, 0), Heading::Right, &[], 12);

        let rendered = garden.snapshot().to_string();
        assert_eq!(rendered, "12 12 12\n 0  K  0\n");
    }

    #[test]
    fn test_rows() {
        let layout = Arc::new(Layout::new(2, 3, []).unwrap());
        let snapshot = Garden::new(layout).snapshot();

        assert_eq!(snapshot.rows().count(), 3);
        assert!(snapshot.rows().all(|row| row.len() == 2));
        assert_eq!(snapshot.get(Position::new(2, 1)), Cell::Empty);
    }
}

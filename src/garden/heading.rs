//! Headings a raking agent can move along, and the fixed turn table used when
//! the cell ahead is obstructed.

use super::Position;

/// One of the four grid-aligned headings.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Row and column offset of a single step along this heading.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    /// The two headings an agent may turn to when blocked, in priority order.
    ///
    /// `TieBreak::First` picks index 0, `TieBreak::Second` index 1.
    pub fn laterals(self) -> [Heading; 2] {
        match self {
            Heading::Down => [Heading::Left, Heading::Right],
            Heading::Up => [Heading::Right, Heading::Left],
            Heading::Right => [Heading::Up, Heading::Down],
            Heading::Left => [Heading::Down, Heading::Up],
        }
    }

    /// The heading that points into the garden from a perimeter cell.
    ///
    /// The top edge wins over the bottom edge, and both win over the side
    /// columns, so corner cells always enter vertically. Returns `None` for
    /// interior cells.
    pub fn inward(position: Position, width: usize, height: usize) -> Option<Heading> {
        if position.row == 0 {
            Some(Heading::Down)
        } else if position.row + 1 == height {
            Some(Heading::Up)
        } else if position.col == 0 {
            Some(Heading::Right)
        } else if position.col + 1 == width {
            Some(Heading::Left)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_laterals_are_perpendicular() {
        for heading in Heading::ALL {
            let (dr, dc) = heading.delta();
            for lateral in heading.laterals() {
                let (lr, lc) = lateral.delta();
                assert_eq!(dr * lr + dc * lc, 0, "{:?} -> {:?}", heading, lateral);
            }
            let [a, b] = heading.laterals();
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_inward_headings() {
        let (w, h) = (4, 3);
        assert_eq!(Heading::inward(Position::new(0, 0), w, h), Some(Heading::Down));
        assert_eq!(Heading::inward(Position::new(0, 2), w, h), Some(Heading::Down));
        assert_eq!(Heading::inward(Position::new(2, 3), w, h), Some(Heading::Up));
        assert_eq!(Heading::inward(Position::new(1, 0), w, h), Some(Heading::Right));
        assert_eq!(Heading::inward(Position::new(1, 3), w, h), Some(Heading::Left));
        assert_eq!(Heading::inward(Position::new(1, 1), w, h), None);
    }
}

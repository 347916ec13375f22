//! Cell coordinates and the Moore neighborhood.

use std::fmt;

/// Offsets of the Moore neighborhood in enumeration order.
const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Largest coordinate magnitude accepted when a pattern is centered.
///
/// A board moves at most one cell per generation, so starting inside
/// `±COORD_LIMIT` leaves 2^62 generations before [`Cell::offset`] could leave
/// the `i64` range.
pub const COORD_LIMIT: i64 = 1 << 62;

/// A position on the unbounded Life plane.
///
/// Coordinates are signed: the live-cell set is never clipped, so cells may
/// drift to negative rows or columns.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Cell {
    pub row: i64,
    pub col: i64,
}

impl Cell {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Shift by `(dr, dc)`. The sum must stay within `i64`; boards built by
    /// [`Simulation`](crate::Simulation) keep well inside [`COORD_LIMIT`].
    pub const fn offset(self, dr: i64, dc: i64) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The 8 Moore neighbors of this cell.
    #[must_use]
    pub fn neighbors(self) -> [Self; 8] {
        neighbors(self)
    }
}

impl From<(i64, i64)> for Cell {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl From<Cell> for (i64, i64) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Enumerate the Moore neighborhood of `cell`.
///
/// Order is fixed: the row above left to right, then left and right on the
/// same row, then the row below left to right. No bounds checking happens here.
#[must_use]
pub fn neighbors(cell: Cell) -> [Cell; 8] {
    MOORE_OFFSETS.map(|(dr, dc)| cell.offset(dr, dc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_order() {
        let n = neighbors(Cell::new(5, 7));
        let expected = [
            (4, 6),
            (4, 7),
            (4, 8),
            (5, 6),
            (5, 8),
            (6, 6),
            (6, 7),
            (6, 8),
        ];
        assert_eq!(n.map(<(i64, i64)>::from), expected);
    }

    #[test]
    fn test_neighbors_exclude_center() {
        let center = Cell::new(0, 0);
        assert!(!center.neighbors().contains(&center));
    }

    #[test]
    fn test_negative_coordinates() {
        // Origin neighbors go negative without clamping
        let n = neighbors(Cell::new(0, 0));
        assert_eq!(n[0], Cell::new(-1, -1));
        assert_eq!(n[7], Cell::new(1, 1));
    }

    #[test]
    fn test_neighbors_are_distinct() {
        let n = neighbors(Cell::new(-3, 12));
        for i in 0..n.len() {
            for j in (i + 1)..n.len() {
                assert_ne!(n[i], n[j]);
            }
        }
    }
}

//! Initial pattern representations.

use crate::{Board, Cell, DenseGrid};

/// An initial pattern: explicit live coordinates or a dense indicator grid.
#[derive(Clone, Debug)]
pub enum Pattern {
    Cells(Board),
    Dense(DenseGrid),
}

impl Pattern {
    /// Collect the live coordinates of this pattern.
    #[must_use]
    pub fn into_board(self) -> Board {
        match self {
            Self::Cells(board) => board,
            Self::Dense(grid) => grid.live_cells().collect(),
        }
    }

    /// Number of live cells in the pattern.
    pub fn population(&self) -> usize {
        match self {
            Self::Cells(board) => board.len(),
            Self::Dense(grid) => grid.live_count(),
        }
    }
}

impl From<Board> for Pattern {
    fn from(board: Board) -> Self {
        Self::Cells(board)
    }
}

impl From<DenseGrid> for Pattern {
    fn from(grid: DenseGrid) -> Self {
        Self::Dense(grid)
    }
}

impl From<&[(i64, i64)]> for Pattern {
    fn from(cells: &[(i64, i64)]) -> Self {
        Self::Cells(cells.iter().copied().map(Cell::from).collect())
    }
}

impl<const N: usize> From<[(i64, i64); N]> for Pattern {
    fn from(cells: [(i64, i64); N]) -> Self {
        Self::Cells(cells.into_iter().map(Cell::from).collect())
    }
}

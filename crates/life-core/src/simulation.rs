use hashbrown::HashSet;
use rustc_hash::FxBuildHasher;
use tracing::debug;

use crate::{Bounds, COORD_LIMIT, Cell, DenseGrid, LifeError, LifeResult, Pattern};

/// The set of live cells in one generation.
pub type Board = HashSet<Cell, FxBuildHasher>;

/// Standard Life rule: birth on 3, survival on 2 or 3.
#[inline]
const fn next_alive(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2) | (_, 3))
}

/// Count live Moore neighbors of `cell` in `board`.
pub fn count_neighbors(board: &Board, cell: Cell) -> usize {
    cell.neighbors()
        .iter()
        .filter(|n| board.contains(*n))
        .count()
}

/// Every cell that could be alive after one step: the live cells and their neighbors.
pub fn candidates(board: &Board) -> Board {
    let mut out = Board::with_capacity_and_hasher(board.len() * 9, FxBuildHasher);
    for &cell in board {
        out.insert(cell);
        out.extend(cell.neighbors());
    }
    out
}

/// Compute the generation after `board` without touching it.
pub fn compute_next_generation(board: &Board) -> Board {
    candidates(board)
        .into_iter()
        .filter(|&cell| next_alive(board.contains(&cell), count_neighbors(board, cell)))
        .collect()
}

/// Translate `board` so its bounding box sits in the middle of `bounds`.
///
/// Offsets use floor division, so a pattern larger than `bounds` gets a negative
/// offset and part of it lands outside the viewport. Fails with
/// [`LifeError::InvalidInput`] if the centered pattern would reach past
/// [`COORD_LIMIT`].
pub fn center_in(board: &Board, bounds: Bounds) -> LifeResult<Board> {
    let mut iter = board.iter();
    let first = iter.next().ok_or(LifeError::EmptyPattern)?;

    let (mut min_row, mut max_row) = (first.row, first.row);
    let (mut min_col, mut max_col) = (first.col, first.col);
    for cell in iter {
        min_row = min_row.min(cell.row);
        max_row = max_row.max(cell.row);
        min_col = min_col.min(cell.col);
        max_col = max_col.max(cell.col);
    }

    let dr = shift_to_center(bounds.height, min_row, max_row)?;
    let dc = shift_to_center(bounds.width, min_col, max_col)?;

    // Both shifted extremes are within COORD_LIMIT, so every cell fits in i64
    Ok(board
        .iter()
        .map(|c| {
            Cell::new(
                (i128::from(c.row) + dr) as i64,
                (i128::from(c.col) + dc) as i64,
            )
        })
        .collect())
}

/// Shift that moves `min..=max` to the floor-centered start within `extent`.
fn shift_to_center(extent: usize, min: i64, max: i64) -> LifeResult<i128> {
    let span = i128::from(max) - i128::from(min) + 1;
    let start = (extent as i128 - span).div_euclid(2);
    let end = start + span - 1;

    let limit = i128::from(COORD_LIMIT);
    if start < -limit || end > limit {
        return Err(LifeError::InvalidInput(format!(
            "pattern spanning {} cells centers to {}..={}, outside +/-{}",
            span, start, end, COORD_LIMIT
        )));
    }

    Ok(start - i128::from(min))
}

/// A running Life simulation over a sparse board.
///
/// The board is logically unbounded. [`Bounds`] is only the viewport used for
/// centering the initial pattern and for [`Simulation::to_dense_snapshot`].
#[derive(Clone, Debug)]
pub struct Simulation {
    board: Board,
    bounds: Bounds,
    generation: u64,
}

impl Simulation {
    /// Build a simulation from an initial pattern, centered in `bounds`.
    pub fn new(pattern: impl Into<Pattern>, bounds: Bounds) -> LifeResult<Self> {
        let initial = pattern.into().into_board();
        let board = center_in(&initial, bounds)?;

        debug!(
            population = board.len(),
            height = bounds.height,
            width = bounds.width,
            "constructed simulation"
        );

        Ok(Self {
            board,
            bounds,
            generation: 0,
        })
    }

    /// Build from explicit live coordinates.
    pub fn from_cells<I, C>(cells: I, bounds: Bounds) -> LifeResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let board: Board = cells.into_iter().map(Into::into).collect();
        Self::new(board, bounds)
    }

    /// Build from a dense indicator grid.
    pub fn from_dense(grid: &DenseGrid, bounds: Bounds) -> LifeResult<Self> {
        Self::new(grid.live_cells().collect::<Board>(), bounds)
    }

    /// Replace the board with the next generation and return it.
    pub fn advance_generation(&mut self) -> &Board {
        let next = compute_next_generation(&self.board);

        self.generation += 1;
        debug!(
            generation = self.generation,
            before = self.board.len(),
            after = next.len(),
            "advanced generation"
        );

        self.board = next;
        &self.board
    }

    /// Advance `n` generations and return the final board.
    pub fn advance_by(&mut self, n: u64) -> &Board {
        for _ in 0..n {
            self.advance_generation();
        }
        &self.board
    }

    /// Dense view of the live cells inside the viewport.
    ///
    /// Live cells outside [`Bounds`] are dropped from the snapshot but stay on
    /// the board.
    #[must_use]
    pub fn to_dense_snapshot(&self) -> DenseGrid {
        let mut grid = DenseGrid::with_bounds(self.bounds);
        let mut clipped = 0usize;

        for &cell in &self.board {
            if self.bounds.contains(cell) {
                grid.set(cell.row as usize, cell.col as usize, true);
            } else {
                clipped += 1;
            }
        }

        if clipped > 0 {
            debug!(
                generation = self.generation,
                clipped, "live cells outside viewport dropped from snapshot"
            );
        }

        grid
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of generations advanced since construction.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.len()
    }
}

//! Dense boolean grids.
//!
//! A [`DenseGrid`] is both an accepted input pattern and the snapshot format
//! handed to renderers.

use std::fmt;

use crate::{Bounds, Cell, LifeError, LifeResult};

/// Row-major `height x width` grid of live/dead markers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DenseGrid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl DenseGrid {
    /// Create an all-dead grid.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Create an all-dead grid with the shape of `bounds`.
    #[must_use]
    pub fn with_bounds(bounds: Bounds) -> Self {
        Self::new(bounds.height, bounds.width)
    }

    /// Build a grid from indicator rows.
    ///
    /// Any value that is not the type's zero counts as live. Rows must all have
    /// the same length.
    pub fn from_rows<R, T>(rows: &[R]) -> LifeResult<Self>
    where
        R: AsRef<[T]>,
        T: Default + PartialEq,
    {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let zero = T::default();

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LifeError::InvalidInput(format!(
                    "ragged grid: row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            cells.extend(row.iter().map(|v| *v != zero));
        }

        Ok(Self {
            height: rows.len(),
            width,
            cells,
        })
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.height, self.width)
    }

    /// Get a marker, `None` if `(row, col)` is outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.height && col < self.width).then(|| self.cells[row * self.width + col])
    }

    /// Whether `(row, col)` is inside the grid and live.
    #[must_use]
    pub fn is_live(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Set a marker. Returns `false` and does nothing if out of range.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = alive;
            true
        } else {
            false
        }
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Live positions in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(idx, _)| Cell::new((idx / width) as i64, (idx % width) as i64))
    }

    /// Iterate over rows as slices.
    ///
    /// Always yields `height` rows, empty ones when the grid has no columns.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }
}

impl fmt::Display for DenseGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

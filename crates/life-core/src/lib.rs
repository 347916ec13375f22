//! Sparse Conway's Game of Life.
//!
//! The live cells of a generation are kept in a hash set, so the cost of a step
//! scales with the population rather than the grid area:
//!
//! ```text
//!   board ──► candidates (live ∪ Moore neighbors) ──► B3/S23 per candidate ──► next board
//!                                                                                 │
//!                                              to_dense_snapshot (viewport) ◄─────┘
//! ```
//!
//! The plane is unbounded. [`Bounds`] only decides where the initial pattern is
//! centered and which part of the board a [`DenseGrid`] snapshot shows.
//!
//! # Usage
//!
//! ```
//! use life_core::{Bounds, Simulation};
//!
//! let mut sim = Simulation::from_cells([(1, 0), (1, 1), (1, 2)], Bounds::new(5, 5))?;
//! let first = sim.to_dense_snapshot();
//! sim.advance_generation();
//! let second = sim.to_dense_snapshot();
//!
//! assert_eq!(first.live_count(), 3);
//! assert_ne!(first, second);
//! # Ok::<(), life_core::LifeError>(())
//! ```

mod bounds;
mod cell;
mod error;
mod grid;
mod pattern;
mod simulation;

pub use bounds::Bounds;
pub use cell::{COORD_LIMIT, Cell, neighbors};
pub use error::{LifeError, LifeResult};
pub use grid::DenseGrid;
pub use pattern::Pattern;
pub use simulation::{
    Board, Simulation, candidates, center_in, compute_next_generation, count_neighbors,
};

//! Construction error types.

use thiserror::Error;

/// Errors raised while building a simulation from an initial pattern.
///
/// Advancing and snapshotting never fail once a [`crate::Simulation`] exists.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// The initial pattern is not a usable representation.
    #[error("invalid input pattern: {0}")]
    InvalidInput(String),

    /// The initial pattern has no live cells, so it has no bounding box.
    #[error("pattern contains no live cells")]
    EmptyPattern,
}

/// Result type for engine construction.
pub type LifeResult<T> = Result<T, LifeError>;

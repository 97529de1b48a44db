//! Shared error types used across submodules.

use thiserror::Error;

use crate::layered::SolveError;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum EmWavesError {
    /// Wraps field-solver errors.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Raised when a geometric description is invalid (e.g. coax radii).
    #[error("geometry error: {0}")]
    Geometry(String),
}

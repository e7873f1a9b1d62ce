//! Error types for banded storage and the banded direct solver

use thiserror::Error;

/// Errors that can occur while building or solving a banded system
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandedError {
    #[error("matrix is singular or nearly singular (zero pivot in column {column})")]
    SingularMatrix { column: usize },
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("invalid band layout: {0}")]
    InvalidBands(String),
}

impl BandedError {
    /// Returns `true` if the error comes from the factorization itself
    /// rather than from malformed input.
    pub fn is_numerical(&self) -> bool {
        matches!(self, BandedError::SingularMatrix { .. })
    }
}

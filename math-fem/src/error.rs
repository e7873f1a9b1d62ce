//! Error types for 1D finite element assembly
//!
//! Assembly itself has no recoverable failure modes: every error here is a
//! precondition violation detected before any band or load entry is written.

use solvers::BandedError;
use thiserror::Error;

/// Errors raised by grid construction, basis lookup, assembly and solving
#[derive(Debug, Error)]
pub enum FemError {
    /// The grid needs at least one element.
    #[error("invalid grid size: N = {n} (must be >= 1)")]
    InvalidGridSize {
        /// The rejected element count
        n: usize,
    },

    /// A basis index outside `[0, 2N]`.
    #[error("basis index {k} out of range for N = {n}")]
    BasisIndexOutOfRange {
        /// The rejected index
        k: usize,
        /// Element count of the grid
        n: usize,
    },

    /// Two supported polynomials built on different grids.
    #[error("grid mismatch: left operand has N = {left}, right operand has N = {right}")]
    GridMismatch {
        /// Grid of the left operand
        left: usize,
        /// Grid of the right operand
        right: usize,
    },

    /// Band or load lengths that do not describe one system.
    #[error("dimension mismatch in {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Which sequence was inconsistent
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Invalid assembly configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failure in the downstream banded solver.
    #[error("solver failed: {0}")]
    Solver(#[from] BandedError),
}

/// A specialized `Result` type for assembly operations.
pub type Result<T> = std::result::Result<T, FemError>;

impl FemError {
    /// Returns `true` if the error is a caller precondition violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FemError::InvalidGridSize { .. }
                | FemError::BasisIndexOutOfRange { .. }
                | FemError::GridMismatch { .. }
                | FemError::DimensionMismatch { .. }
        )
    }
}

//! Uniform grid on the unit interval
//!
//! The grid is fully described by its element count N: nodes sit at `i/N`
//! for `i = 0..=N`, element `i` spans `[i/N, (i+1)/N]`, and the hat/bump
//! basis has `2N + 1` functions.

use crate::error::{FemError, Result};
use serde::{Deserialize, Serialize};

/// Uniform partition of [0, 1] into N elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    n: usize,
}

impl Grid {
    /// Create a grid with `n` elements (`n >= 1`)
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(FemError::InvalidGridSize { n });
        }
        Ok(Self { n })
    }

    /// Number of elements N
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Element width 1/N
    #[inline]
    pub fn h(&self) -> f64 {
        1.0 / self.n as f64
    }

    /// Number of basis functions, 2N + 1
    #[inline]
    pub fn num_basis(&self) -> usize {
        2 * self.n + 1
    }

    /// Largest valid basis index, 2N
    #[inline]
    pub fn max_index(&self) -> usize {
        2 * self.n
    }

    /// Coordinate of node `i` (may lie outside [0, 1] for unclamped indices)
    #[inline]
    pub fn node(&self, i: i64) -> f64 {
        i as f64 / self.n as f64
    }

    /// Node coordinate clamped to [0, 1]
    #[inline]
    pub fn clamped_node(&self, i: i64) -> f64 {
        self.node(i.clamp(0, self.n as i64))
    }

    /// Check that `k` is a valid basis index
    pub fn check_index(&self, k: usize) -> Result<()> {
        if k > self.max_index() {
            return Err(FemError::BasisIndexOutOfRange { k, n: self.n });
        }
        Ok(())
    }
}

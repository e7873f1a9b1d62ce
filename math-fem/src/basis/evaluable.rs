//! Pointwise evaluation of hat and bump functions
//!
//! [`BasisFunction`] is a small value object; it is what the load assembler
//! multiplies with an arbitrary forcing function.

use super::index::{BasisIndex, BasisKind};
use crate::error::Result;
use crate::mesh::Grid;

/// Hat or bump function bound to its grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasisFunction {
    pub kind: BasisKind,
    /// Node index (hat) or element index (bump)
    pub element: usize,
    pub grid: Grid,
}

impl BasisFunction {
    /// Build the function for a classified index
    pub fn from_index(index: BasisIndex, grid: Grid) -> Self {
        Self {
            kind: index.kind,
            element: index.element,
            grid,
        }
    }

    /// Clamped support interval
    pub fn support(&self) -> (f64, f64) {
        let i = self.element as i64;
        match self.kind {
            BasisKind::Hat => (self.grid.clamped_node(i - 1), self.grid.clamped_node(i + 1)),
            BasisKind::Bump => (self.grid.clamped_node(i), self.grid.clamped_node(i + 1)),
        }
    }

    /// Value at `x`, zero outside the support
    pub fn eval(&self, x: f64) -> f64 {
        let (left, right) = self.support();
        if x < left || x > right {
            return 0.0;
        }
        let n = self.grid.n() as f64;
        let i = self.element as f64;
        let t = match self.kind {
            BasisKind::Hat => n * (x - i / n),
            BasisKind::Bump => 2.0 * n * (x - (i + 0.5) / n),
        };
        1.0 - t * t
    }
}

/// Evaluable basis function `k` on a grid with `n` elements
pub fn basis_value(k: usize, n: usize) -> Result<BasisFunction> {
    let grid = Grid::new(n)?;
    let index = BasisIndex::new(k, grid)?;
    Ok(BasisFunction::from_index(index, grid))
}

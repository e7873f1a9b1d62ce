//! Linear index space over hat and bump basis functions
//!
//! Index `k ∈ [0, 2N]` maps to:
//! - even k: HAT centered at node `i = k/2`, support `[(i-1)/N, (i+1)/N]`
//! - odd k: BUMP on element `i = k/2`, support `[i/N, (i+1)/N]`
//!
//! with supports clamped to [0, 1].

use crate::error::Result;
use crate::mesh::Grid;
use serde::{Deserialize, Serialize};

/// Kind of quadratic basis function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasisKind {
    /// Full-node function on the two elements around a node
    Hat,
    /// Half-node function on a single element
    Bump,
}

/// Classified basis index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasisIndex {
    /// Linear index in [0, 2N]
    pub k: usize,
    /// Hat or bump
    pub kind: BasisKind,
    /// Node index (hat) or element index (bump), always `k / 2`
    pub element: usize,
}

impl BasisIndex {
    /// Classify `k` on `grid`
    pub fn new(k: usize, grid: Grid) -> Result<Self> {
        grid.check_index(k)?;
        Ok(Self::classify(k))
    }

    /// Classify without range checking
    #[inline]
    pub(crate) fn classify(k: usize) -> Self {
        let kind = if k % 2 == 0 {
            BasisKind::Hat
        } else {
            BasisKind::Bump
        };
        Self {
            k,
            kind,
            element: k / 2,
        }
    }

    /// Unclamped support bounds as element indices
    pub fn support_elements(&self) -> (i64, i64) {
        let i = self.element as i64;
        match self.kind {
            BasisKind::Hat => (i - 1, i + 1),
            BasisKind::Bump => (i, i + 1),
        }
    }

    /// Support interval clamped to [0, 1]
    pub fn support(&self, grid: Grid) -> (f64, f64) {
        let (left, right) = self.support_elements();
        (grid.clamped_node(left), grid.clamped_node(right))
    }

    /// Point where the function reaches 1
    pub fn center(&self, grid: Grid) -> f64 {
        let i = self.element as f64;
        match self.kind {
            BasisKind::Hat => i * grid.h(),
            BasisKind::Bump => (i + 0.5) * grid.h(),
        }
    }
}

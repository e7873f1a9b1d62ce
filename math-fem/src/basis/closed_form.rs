//! Closed-form polynomials of the hat and bump functions
//!
//! Expanding the evaluable definitions gives, for element/node `i`:
//! - hat:  `1 - (Nx - i)²        = -N²x² + 2iN x + (1 - i²)`
//! - bump: `1 - (2Nx - 2i - 1)²  = -4N²x² + (4N + 8iN) x - (4i + 4i²)`

use super::index::{BasisIndex, BasisKind};
use crate::error::Result;
use crate::mesh::Grid;
use crate::polynomial::{Polynomial, SupportedPolynomial};

/// Hat polynomial centered at node `i`
pub fn hat_polynomial(i: usize, n: usize) -> Polynomial {
    let (i, n) = (i as f64, n as f64);
    Polynomial::quadratic(1.0 - i * i, 2.0 * i * n, -n * n)
}

/// Bump polynomial on element `i`
pub fn bump_polynomial(i: usize, n: usize) -> Polynomial {
    let (i, n) = (i as f64, n as f64);
    Polynomial::quadratic(-4.0 * i - 4.0 * i * i, 4.0 * n + 8.0 * i * n, -4.0 * n * n)
}

/// Supported polynomial of an already classified index
pub fn supported_polynomial(index: BasisIndex, grid: Grid) -> SupportedPolynomial {
    let poly = match index.kind {
        BasisKind::Hat => hat_polynomial(index.element, grid.n()),
        BasisKind::Bump => bump_polynomial(index.element, grid.n()),
    };
    let (left, right) = index.support_elements();
    SupportedPolynomial::new(poly, left, right, grid)
}

/// Exact polynomial of basis function `k` on a grid with `n` elements
pub fn basis_polynomial(k: usize, n: usize) -> Result<SupportedPolynomial> {
    let grid = Grid::new(n)?;
    let index = BasisIndex::new(k, grid)?;
    Ok(supported_polynomial(index, grid))
}

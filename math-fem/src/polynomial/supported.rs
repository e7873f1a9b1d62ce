//! Polynomials restricted to a range of grid elements
//!
//! A [`SupportedPolynomial`] is a polynomial together with the element range
//! `[left/N, right/N]` on which it is meaningful. Outside that range the
//! function it represents is zero; the polynomial itself does not know this,
//! so callers use the support bounds. Element indices are kept unclamped
//! (a hat at node 0 reaches element -1) and are clamped to `[0, N]` only
//! when integrating.

use super::dense::Polynomial;
use crate::config::Coefficients;
use crate::error::{FemError, Result};
use crate::mesh::Grid;

/// Polynomial with compact support on grid elements
#[derive(Debug, Clone, PartialEq)]
pub struct SupportedPolynomial {
    poly: Polynomial,
    /// Left support bound as an element index
    pub left: i64,
    /// Right support bound as an element index
    pub right: i64,
    /// Grid the element indices refer to
    pub grid: Grid,
}

impl SupportedPolynomial {
    pub fn new(poly: Polynomial, left: i64, right: i64, grid: Grid) -> Self {
        Self {
            poly,
            left,
            right,
            grid,
        }
    }

    /// Underlying polynomial
    pub fn polynomial(&self) -> &Polynomial {
        &self.poly
    }

    /// Element bounds clamped to the grid `[0, N]`
    pub fn clamped_elements(&self) -> (i64, i64) {
        (self.left.max(0), self.right.min(self.grid.n() as i64))
    }

    /// Support as a real interval inside [0, 1]
    pub fn support(&self) -> (f64, f64) {
        let (lo, hi) = self.clamped_elements();
        (self.grid.node(lo), self.grid.node(hi))
    }

    /// Whether `x` lies in the closed support
    pub fn contains(&self, x: f64) -> bool {
        let (lo, hi) = self.support();
        lo <= x && x <= hi
    }

    /// Raw polynomial value, meaningful only inside the support
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.poly.eval(x)
    }

    /// Product with the support narrowed to the intersection
    pub fn multiply(&self, other: &SupportedPolynomial) -> Result<SupportedPolynomial> {
        if self.grid != other.grid {
            return Err(FemError::GridMismatch {
                left: self.grid.n(),
                right: other.grid.n(),
            });
        }
        Ok(Self {
            poly: &self.poly * &other.poly,
            left: self.left.max(other.left),
            right: self.right.min(other.right),
            grid: self.grid,
        })
    }

    /// Derivative on the same support
    pub fn derivative(&self) -> SupportedPolynomial {
        Self {
            poly: self.poly.derivative(),
            left: self.left,
            right: self.right,
            grid: self.grid,
        }
    }

    /// Exact integral over the clamped support, zero when the support is empty
    pub fn integrate(&self) -> f64 {
        let (lo, hi) = self.clamped_elements();
        if lo >= hi {
            return 0.0;
        }
        self.poly.integrate(self.grid.node(lo), self.grid.node(hi))
    }

    /// Exact integral scaled by the stiffness (`weighted`) or mass coefficient
    pub fn definite_integral(&self, weighted: bool, coefficients: &Coefficients) -> f64 {
        coefficients.select(weighted) * self.integrate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(n: usize) -> Grid {
        Grid::new(n).unwrap()
    }

    #[test]
    fn test_support_clamping() {
        let p = SupportedPolynomial::new(Polynomial::quadratic(1.0, 0.0, -1.0), -1, 1, grid(1));
        assert_eq!(p.clamped_elements(), (0, 1));
        assert_eq!(p.support(), (0.0, 1.0));
        assert!(p.contains(0.5));
        assert!(!p.contains(1.5));
    }

    #[test]
    fn test_multiply_intersects_support() {
        let g = grid(4);
        let p = SupportedPolynomial::new(Polynomial::new(vec![1.0, 1.0]), 0, 2, g);
        let q = SupportedPolynomial::new(Polynomial::new(vec![2.0]), 1, 3, g);
        let pq = p.multiply(&q).unwrap();
        assert_eq!((pq.left, pq.right), (1, 2));
        assert_eq!(pq.polynomial().coeffs(), &[2.0, 2.0]);
    }

    #[test]
    fn test_multiply_grid_mismatch() {
        let p = SupportedPolynomial::new(Polynomial::new(vec![1.0]), 0, 1, grid(2));
        let q = SupportedPolynomial::new(Polynomial::new(vec![1.0]), 0, 1, grid(3));
        assert!(matches!(
            p.multiply(&q),
            Err(FemError::GridMismatch { left: 2, right: 3 })
        ));
    }

    #[test]
    fn test_integrate_disjoint_is_zero() {
        let g = grid(4);
        let p = SupportedPolynomial::new(Polynomial::new(vec![1.0]), 0, 1, g);
        let q = SupportedPolynomial::new(Polynomial::new(vec![1.0]), 1, 2, g);
        let r = SupportedPolynomial::new(Polynomial::new(vec![1.0]), 2, 3, g);
        assert_eq!(p.multiply(&q).unwrap().integrate(), 0.0);
        assert_eq!(p.multiply(&r).unwrap().integrate(), 0.0);
    }

    #[test]
    fn test_definite_integral_scaling() {
        let g = grid(2);
        let p = SupportedPolynomial::new(Polynomial::new(vec![0.0, 2.0]), 0, 2, g);
        let coefficients = Coefficients::new(3.0, 0.5);
        assert_relative_eq!(p.integrate(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(p.definite_integral(true, &coefficients), 3.0, epsilon = 1e-15);
        assert_relative_eq!(p.definite_integral(false, &coefficients), 0.5, epsilon = 1e-15);
    }
}

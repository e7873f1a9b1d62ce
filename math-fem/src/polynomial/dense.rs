//! Dense real polynomials in ascending coefficient order

use num_traits::Zero;
use std::ops::{Add, Mul};

/// Polynomial p(x) = Σ coeffs[j] x^j
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create from ascending coefficients `[c0, c1, c2, ...]`
    pub fn new(coeffs: Vec<f64>) -> Self {
        Self { coeffs }
    }

    /// Quadratic c + b x + a x²
    pub fn quadratic(c: f64, b: f64, a: f64) -> Self {
        Self::new(vec![c, b, a])
    }

    /// Ascending coefficients
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Degree of the highest non-zero coefficient (0 for the zero polynomial)
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    /// Evaluate with Horner's scheme
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
    }

    /// First derivative
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() <= 1 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(j, &c)| j as f64 * c)
            .collect();
        Self::new(coeffs)
    }

    /// Antiderivative with zero constant term
    pub fn antiderivative(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(j, &c)| c / (j + 1) as f64),
        );
        Self::new(coeffs)
    }

    /// Exact definite integral over [a, b]
    pub fn integrate(&self, a: f64, b: f64) -> f64 {
        let primitive = self.antiderivative();
        primitive.eval(b) - primitive.eval(a)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self::new(vec![0.0])
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coefficient = |p: &Polynomial, j: usize| p.coeffs.get(j).copied().unwrap_or(0.0);
        let coeffs = (0..len)
            .map(|j| coefficient(self, j) + coefficient(rhs, j))
            .collect();
        Polynomial::new(coeffs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    /// Coefficient convolution
    fn mul(self, rhs: Self) -> Polynomial {
        if self.coeffs.is_empty() || rhs.coeffs.is_empty() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &p) in self.coeffs.iter().enumerate() {
            for (j, &q) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += p * q;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_eval_horner() {
        let p = Polynomial::quadratic(1.0, -2.0, 3.0);
        assert_relative_eq!(p.eval(2.0), 1.0 - 4.0 + 12.0);
        assert_eq!(p.degree(), 2);
    }

    #[test]
    fn test_multiply() {
        // (1 + x)(1 - x) = 1 - x²
        let p = Polynomial::new(vec![1.0, 1.0]);
        let q = Polynomial::new(vec![1.0, -1.0]);
        assert_eq!((&p * &q).coeffs(), &[1.0, 0.0, -1.0]);
    }

    #[test]
    fn test_derivative() {
        let p = Polynomial::new(vec![5.0, 3.0, -2.0, 1.0]);
        assert_eq!(p.derivative().coeffs(), &[3.0, -4.0, 3.0]);
        assert!(Polynomial::new(vec![7.0]).derivative().is_zero());
    }

    #[test]
    fn test_integrate() {
        // ∫_0^1 (1 - x²) dx = 2/3
        let p = Polynomial::quadratic(1.0, 0.0, -1.0);
        assert_relative_eq!(p.integrate(0.0, 1.0), 2.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(p.integrate(-1.0, 1.0), 4.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(p.integrate(0.5, 0.5), 0.0);
    }

    #[test]
    fn test_add_and_zero() {
        let p = Polynomial::new(vec![1.0, 2.0]);
        let q = Polynomial::quadratic(0.0, -2.0, 4.0);
        assert_eq!((p + q).coeffs(), &[1.0, 0.0, 4.0]);
        assert!(Polynomial::zero().is_zero());
        assert_eq!(Polynomial::zero().degree(), 0);
    }
}

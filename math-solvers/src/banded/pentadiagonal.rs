//! Pentadiagonal matrix stored as five explicit bands
//!
//! Row `k` of the matrix reads:
//! - `e[k-2]` at column `k-2`
//! - `d[k-1]` at column `k-1`
//! - `c[k]` on the diagonal
//! - `b[k]` at column `k+1`
//! - `a[k]` at column `k+2`
//!
//! Both off-diagonal directions are stored even when the matrix is symmetric,
//! so boundary rows can be overwritten independently of their columns.

use crate::error::BandedError;
use ndarray::{Array1, Array2};

/// Pentadiagonal matrix with bands `(a, b, c, d, e)`
#[derive(Debug, Clone, PartialEq)]
pub struct Pentadiagonal {
    /// Offset +2, length n-2
    pub a: Vec<f64>,
    /// Offset +1, length n-1
    pub b: Vec<f64>,
    /// Diagonal, length n
    pub c: Vec<f64>,
    /// Offset -1, length n-1
    pub d: Vec<f64>,
    /// Offset -2, length n-2
    pub e: Vec<f64>,
}

impl Pentadiagonal {
    /// Build from explicit bands, checking that their lengths agree
    pub fn new(
        a: Vec<f64>,
        b: Vec<f64>,
        c: Vec<f64>,
        d: Vec<f64>,
        e: Vec<f64>,
    ) -> Result<Self, BandedError> {
        let matrix = Self { a, b, c, d, e };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Check that the band lengths are consistent with the diagonal
    pub fn validate(&self) -> Result<(), BandedError> {
        let n = self.c.len();
        if n == 0 {
            return Err(BandedError::InvalidBands("empty diagonal".to_string()));
        }
        for (name, band, expected) in [
            ("b", &self.b, n - 1),
            ("d", &self.d, n - 1),
            ("a", &self.a, n.saturating_sub(2)),
            ("e", &self.e, n.saturating_sub(2)),
        ] {
            if band.len() != expected {
                return Err(BandedError::InvalidBands(format!(
                    "band {} has length {}, expected {} for dimension {}",
                    name,
                    band.len(),
                    expected,
                    n
                )));
            }
        }
        Ok(())
    }

    /// Zero matrix of dimension `n`
    pub fn zeros(n: usize) -> Self {
        Self {
            a: vec![0.0; n.saturating_sub(2)],
            b: vec![0.0; n.saturating_sub(1)],
            c: vec![0.0; n],
            d: vec![0.0; n.saturating_sub(1)],
            e: vec![0.0; n.saturating_sub(2)],
        }
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.c.len()
    }

    /// Entry at `(i, j)`, zero outside the band
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if j == i {
            self.c[i]
        } else if j == i + 1 {
            self.b[i]
        } else if j == i + 2 {
            self.a[i]
        } else if j + 1 == i {
            self.d[j]
        } else if j + 2 == i {
            self.e[j]
        } else {
            0.0
        }
    }

    /// Non-zero pattern of row `i` as `(column, value)` pairs
    pub fn row_entries(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let n = self.dim();
        let first = i.saturating_sub(2);
        let last = (i + 2).min(n - 1);
        (first..=last).map(move |j| (j, self.get(i, j)))
    }

    /// Matrix-vector product y = A*x
    pub fn matvec(&self, x: &Array1<f64>) -> Result<Array1<f64>, BandedError> {
        self.validate()?;
        let n = self.dim();
        if x.len() != n {
            return Err(BandedError::DimensionMismatch {
                expected: n,
                got: x.len(),
            });
        }

        let y = Array1::from_iter((0..n).map(|i| {
            self.row_entries(i)
                .map(|(j, value)| value * x[j])
                .sum::<f64>()
        }));
        Ok(y)
    }

    /// Expand to a dense matrix
    ///
    /// Panics if the band lengths are inconsistent; see [`Self::validate`].
    pub fn to_dense(&self) -> Array2<f64> {
        let n = self.dim();
        let mut dense = Array2::zeros((n, n));
        for i in 0..n {
            for (j, value) in self.row_entries(i) {
                dense[[i, j]] = value;
            }
        }
        dense
    }

    /// Maximum deviation between mirrored off-diagonal bands
    pub fn asymmetry(&self) -> f64 {
        let upper = self.b.iter().zip(&self.d).map(|(b, d)| (b - d).abs());
        let outer = self.a.iter().zip(&self.e).map(|(a, e)| (a - e).abs());
        upper.chain(outer).fold(0.0, f64::max)
    }
}

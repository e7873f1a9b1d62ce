//! Banded LU decomposition for pentadiagonal systems
//!
//! Gaussian elimination with partial pivoting restricted to the band.
//! Row swaps only look two rows below the diagonal (the lower bandwidth),
//! so the upper factor grows to at most four super-diagonals.

use crate::banded::Pentadiagonal;
use crate::error::BandedError;
use ndarray::{Array1, Array2};

/// Lower bandwidth of a pentadiagonal matrix
const LOWER: usize = 2;
/// Upper bandwidth of U after pivoting (lower + upper)
const UPPER_FILL: usize = 4;
/// Stored window per row: columns i-2 ..= i+4
const WIDTH: usize = LOWER + UPPER_FILL + 1;
/// Pivots below this magnitude are treated as zero
const PIVOT_TOLERANCE: f64 = 1e-30;

/// Row-wise band window, column `j` of row `i` lives at slot `j + 2 - i`
#[derive(Debug, Clone)]
struct BandWindow {
    data: Array2<f64>,
}

impl BandWindow {
    fn zeros(n: usize) -> Self {
        Self {
            data: Array2::zeros((n, WIDTH)),
        }
    }

    #[inline]
    fn slot(i: usize, j: usize) -> Option<usize> {
        let offset = j as isize - i as isize + LOWER as isize;
        (0..WIDTH as isize)
            .contains(&offset)
            .then_some(offset as usize)
    }

    #[inline]
    fn get(&self, i: usize, j: usize) -> f64 {
        Self::slot(i, j).map_or(0.0, |s| self.data[[i, s]])
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, value: f64) {
        match Self::slot(i, j) {
            Some(s) => self.data[[i, s]] = value,
            None => debug_assert!(value == 0.0, "fill-in outside band at ({}, {})", i, j),
        }
    }
}

/// Banded LU factorization result
///
/// Keeps the upper factor, the per-step multipliers and the row swaps so the
/// factorization can be reused for several right-hand sides.
#[derive(Debug, Clone)]
pub struct BandedLu {
    upper: BandWindow,
    /// multipliers[[k, r]] eliminates row k+1+r at step k
    multipliers: Array2<f64>,
    /// Row swapped with row k at step k
    pivots: Vec<usize>,
    /// Matrix dimension
    pub n: usize,
}

impl BandedLu {
    /// Factorize a pentadiagonal matrix
    pub fn factorize(matrix: &Pentadiagonal) -> Result<Self, BandedError> {
        matrix.validate()?;
        let n = matrix.dim();

        let mut w = BandWindow::zeros(n);
        for i in 0..n {
            for (j, value) in matrix.row_entries(i) {
                w.set(i, j, value);
            }
        }

        let mut multipliers = Array2::zeros((n, LOWER));
        let mut pivots = Vec::with_capacity(n);

        for k in 0..n {
            let last_row = (k + LOWER).min(n - 1);
            let last_col = (k + UPPER_FILL).min(n - 1);

            // Find pivot
            let mut max_val = w.get(k, k).abs();
            let mut max_row = k;
            for r in (k + 1)..=last_row {
                let val = w.get(r, k).abs();
                if val > max_val {
                    max_val = val;
                    max_row = r;
                }
            }

            if max_val < PIVOT_TOLERANCE {
                return Err(BandedError::SingularMatrix { column: k });
            }

            if max_row != k {
                for j in k..=last_col {
                    let tmp = w.get(k, j);
                    w.set(k, j, w.get(max_row, j));
                    w.set(max_row, j, tmp);
                }
            }
            pivots.push(max_row);

            let pivot = w.get(k, k);
            for r in (k + 1)..=last_row {
                let mult = w.get(r, k) / pivot;
                multipliers[[k, r - k - 1]] = mult;
                w.set(r, k, 0.0);
                if mult != 0.0 {
                    for j in (k + 1)..=last_col {
                        let updated = w.get(r, j) - mult * w.get(k, j);
                        w.set(r, j, updated);
                    }
                }
            }
        }

        Ok(Self {
            upper: w,
            multipliers,
            pivots,
            n,
        })
    }

    /// Solve Ax = b using the pre-computed factorization
    pub fn solve(&self, b: &Array1<f64>) -> Result<Array1<f64>, BandedError> {
        if b.len() != self.n {
            return Err(BandedError::DimensionMismatch {
                expected: self.n,
                got: b.len(),
            });
        }

        let n = self.n;
        let mut x = b.clone();

        // Replay row swaps and elimination on the right-hand side
        for k in 0..n {
            let p = self.pivots[k];
            if p != k {
                x.swap(k, p);
            }
            for r in (k + 1)..=(k + LOWER).min(n - 1) {
                let update = self.multipliers[[k, r - k - 1]] * x[k];
                x[r] -= update;
            }
        }

        // Backward substitution: Ux = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..=(i + UPPER_FILL).min(n - 1) {
                sum -= self.upper.get(i, j) * x[j];
            }
            x[i] = sum / self.upper.get(i, i);
        }

        Ok(x)
    }
}

/// Solve a pentadiagonal system Ax = b
///
/// Convenience wrapper combining factorization and solve.
pub fn pentadiagonal_solve(
    matrix: &Pentadiagonal,
    b: &Array1<f64>,
) -> Result<Array1<f64>, BandedError> {
    if b.len() != matrix.dim() {
        return Err(BandedError::DimensionMismatch {
            expected: matrix.dim(),
            got: b.len(),
        });
    }
    let factorization = BandedLu::factorize(matrix)?;
    log::debug!("Banded LU factorized, dimension {}", factorization.n);
    factorization.solve(b)
}

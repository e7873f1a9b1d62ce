//! Boundary row stamping for the assembled pentadiagonal system
//!
//! Overwrites the first and last rows of the system:
//! - row 0 becomes `u_0 + 4N u_1 + 2N u_2 = 0`, i.e. `u(0) + u'(0) = 0`
//!   (hat_0(0) = 1, bump_0'(0) = 4N, hat_1'(0) = 2N)
//! - row 2N becomes `u_{2N} = 0`, i.e. `u(1) = 0`
//!
//! This is a pure overwrite applied after assembly; every other entry is
//! left untouched.

use crate::error::{FemError, Result};
use solvers::Pentadiagonal;

/// Pentadiagonal matrix and right-hand side with boundary rows stamped
#[derive(Debug, Clone, PartialEq)]
pub struct PentadiagonalSystem {
    /// The five bands
    pub bands: Pentadiagonal,
    /// Right-hand side
    pub load: Vec<f64>,
}

impl PentadiagonalSystem {
    /// Element count N recovered from the diagonal length 2N + 1
    pub fn n(&self) -> usize {
        self.bands.c.len() / 2
    }

    /// Stamp the boundary rows again (no-op on a stamped system)
    pub fn apply_boundary(self) -> Result<Self> {
        apply_boundary(self.bands, self.load)
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(FemError::DimensionMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}

/// Overwrite boundary rows of `bands` and entries of `load`
pub fn apply_boundary(mut bands: Pentadiagonal, mut load: Vec<f64>) -> Result<PentadiagonalSystem> {
    let dim = bands.c.len();
    if dim < 3 || dim % 2 == 0 {
        return Err(FemError::DimensionMismatch {
            what: "diagonal",
            expected: 2 * (dim / 2).max(1) + 1,
            got: dim,
        });
    }
    check_len("band b", dim - 1, bands.b.len())?;
    check_len("band d", dim - 1, bands.d.len())?;
    check_len("band a", dim - 2, bands.a.len())?;
    check_len("band e", dim - 2, bands.e.len())?;
    check_len("load", dim, load.len())?;

    let n = dim / 2;
    let nf = n as f64;
    let last = 2 * n;

    bands.c[0] = 1.0;
    bands.b[0] = 4.0 * nf;
    bands.a[0] = 2.0 * nf;
    load[0] = 0.0;

    bands.c[last] = 1.0;
    bands.d[last - 1] = 0.0;
    bands.e[last - 2] = 0.0;
    load[last] = 0.0;

    log::debug!("Stamped boundary rows 0 and {} (N = {})", last, n);

    Ok(PentadiagonalSystem { bands, load })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembly::{assemble_bands, assemble_load};

    #[test]
    fn test_single_element_scenario() {
        let bands = assemble_bands(1).unwrap();
        let load = assemble_load(1, |x| 1.0 + x).unwrap();
        assert_eq!((bands.c.len(), bands.b.len(), bands.a.len()), (3, 2, 1));

        let untouched_b1 = bands.b[1];
        let untouched_d0 = bands.d[0];
        let untouched_c1 = bands.c[1];
        let untouched_f1 = load[1];

        let system = apply_boundary(bands, load).unwrap();
        assert_eq!(system.n(), 1);
        assert_eq!(system.bands.c[0], 1.0);
        assert_eq!(system.bands.b[0], 4.0);
        assert_eq!(system.bands.a[0], 2.0);
        assert_eq!(system.load[0], 0.0);
        assert_eq!(system.bands.c[2], 1.0);
        assert_eq!(system.bands.d[1], 0.0);
        assert_eq!(system.bands.e[0], 0.0);
        assert_eq!(system.load[2], 0.0);

        assert_eq!(system.bands.b[1], untouched_b1);
        assert_eq!(system.bands.d[0], untouched_d0);
        assert_eq!(system.bands.c[1], untouched_c1);
        assert_eq!(system.load[1], untouched_f1);
    }

    #[test]
    fn test_only_boundary_entries_change() {
        let n = 4;
        let bands = assemble_bands(n).unwrap();
        let load = assemble_load(n, f64::cos).unwrap();
        let system = apply_boundary(bands.clone(), load.clone()).unwrap();

        for k in 1..2 * n {
            assert_eq!(system.bands.c[k], bands.c[k]);
            assert_eq!(system.load[k], load[k]);
        }
        for k in 1..2 * n {
            assert_eq!(system.bands.b[k], bands.b[k]);
        }
        for k in 0..2 * n - 1 {
            assert_eq!(system.bands.d[k], bands.d[k]);
        }
        assert_eq!(system.bands.b[0], 16.0);
        assert_eq!(system.bands.a[0], 8.0);
        assert_eq!(&system.bands.a[1..], &bands.a[1..]);
        assert_eq!(&system.bands.e[..2 * n - 2], &bands.e[..2 * n - 2]);
    }

    #[test]
    fn test_idempotent() {
        let bands = assemble_bands(3).unwrap();
        let load = assemble_load(3, |x| x * x).unwrap();
        let once = apply_boundary(bands, load).unwrap();
        let twice = once.clone().apply_boundary().unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dimension_mismatch() {
        let bands = assemble_bands(2).unwrap();
        let result = apply_boundary(bands, vec![0.0; 3]);
        assert!(matches!(
            result,
            Err(FemError::DimensionMismatch {
                what: "load",
                expected: 5,
                got: 3
            })
        ));

        let even = Pentadiagonal::zeros(4);
        assert!(apply_boundary(even, vec![0.0; 4]).is_err());
    }
}

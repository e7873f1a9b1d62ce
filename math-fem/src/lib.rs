//! Galerkin assembly for a 1D boundary value problem on [0, 1]
//!
//! This crate assembles the linear system of a finite element discretization
//! using a mixed quadratic basis: full-node HAT functions and half-node BUMP
//! functions, unified into one index space `k ∈ [0, 2N]`.
//!
//! # Features
//!
//! - **Basis**: evaluable hat/bump functions and their exact polynomial forms
//! - **Exact integration**: stiffness and mass entries via polynomial algebra
//! - **Pentadiagonal assembly**: five explicit bands `(a, b, c, d, e)`
//! - **Load vector**: composite Gauss-Legendre against any forcing term
//! - **Boundary rows**: `u(0) + u'(0) = 0` and `u(1) = 0`
//! - **Direct solve**: banded LU from `math-audio-solvers`
//!
//! # Example
//!
//! ```ignore
//! use math_audio_fem1d::{AssemblyConfig, BvpProblem, Grid};
//!
//! let grid = Grid::new(16)?;
//! let problem = BvpProblem::assemble(grid, |x| 1.0 - x, &AssemblyConfig::default())?;
//! let solution = problem.solve()?;
//! let u_mid = solution.eval(0.5);
//! ```

pub mod assembly;
pub mod basis;
pub mod boundary;
pub mod config;
pub mod error;
pub mod mesh;
pub mod polynomial;
pub mod quadrature;
pub mod solver;

pub use assembly::{Pentadiagonal, assemble_bands, assemble_bands_with, assemble_load, assemble_load_with};
pub use basis::{BasisFunction, BasisIndex, BasisKind, basis_polynomial, basis_value};
pub use boundary::{PentadiagonalSystem, apply_boundary};
pub use config::{AssemblyConfig, Coefficients};
pub use error::{FemError, Result};
pub use mesh::Grid;
pub use polynomial::{Polynomial, SupportedPolynomial};
pub use solver::{BvpProblem, FemSolution};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

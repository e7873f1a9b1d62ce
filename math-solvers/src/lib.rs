//! Banded direct solvers for 1D finite element systems
//!
//! This crate provides explicit-band matrix storage and a direct solver for
//! the pentadiagonal systems produced by quadratic 1D finite elements.
//!
//! # Features
//!
//! - **Band storage**: five explicit bands `(a, b, c, d, e)`, both directions kept
//! - **Direct solver**: banded LU with partial pivoting, reusable for several right-hand sides
//! - **Matrix-vector products**: for residual checks
//!
//! # Example
//!
//! ```ignore
//! use math_audio_solvers::{Pentadiagonal, pentadiagonal_solve};
//!
//! let matrix = Pentadiagonal::new(a, b, c, d, e)?;
//! let solution = pentadiagonal_solve(&matrix, &rhs)?;
//! ```

pub mod banded;
pub mod direct;
pub mod error;

pub use banded::Pentadiagonal;
pub use direct::{BandedLu, pentadiagonal_solve};
pub use error::BandedError;
